use candle::{DType, Device, Result, Tensor};
use candle_core as candle;
use candle_core::IndexOp;
use candle_nn::{Linear, Module, VarBuilder};
use candle_transformers::models::bert::{BertModel, Config};
use std::path::Path;

/// Loads the encoder, handling the weight prefixes different export
/// toolchains produce.
fn load_bert_model(vb: VarBuilder, config: &Config) -> Result<BertModel> {
    if vb.contains_tensor("bert.embeddings.word_embeddings.weight") {
        BertModel::load(vb.pp("bert"), config)
    } else if vb.contains_tensor("roberta.embeddings.word_embeddings.weight") {
        BertModel::load(vb.pp("roberta"), config)
    } else {
        BertModel::load(vb.clone(), config)
    }
}

fn read_model_dir(model_dir: &Path, device: &Device) -> Result<(VarBuilder<'static>, Config)> {
    let config_path = model_dir.join("config.json");
    let weights_path = model_dir.join("model.safetensors");

    let config_content = std::fs::read_to_string(config_path)?;
    let config: Config = serde_json::from_str(&config_content)
        .map_err(|e| candle::Error::Msg(format!("Failed to parse config: {}", e)))?;

    let vb = unsafe { VarBuilder::from_mmaped_safetensors(&[weights_path], DType::F32, device)? };

    Ok((vb, config))
}

/// Plain BERT encoder producing per-token hidden states.
///
/// The dense provider mean-pools these into sentence embeddings.
pub struct BertEncoder {
    bert: BertModel,
    hidden_size: usize,
}

impl BertEncoder {
    pub fn load<P: AsRef<Path>>(model_dir: P, device: &Device) -> Result<Self> {
        let (vb, config) = read_model_dir(model_dir.as_ref(), device)?;
        let hidden_size = config.hidden_size;
        let bert = load_bert_model(vb, &config)?;

        Ok(Self { bert, hidden_size })
    }

    pub fn hidden_size(&self) -> usize {
        self.hidden_size
    }

    /// Returns hidden states of shape `[batch, seq_len, hidden_size]`.
    pub fn forward(
        &self,
        input_ids: &Tensor,
        token_type_ids: &Tensor,
        attention_mask: Option<&Tensor>,
    ) -> Result<Tensor> {
        self.bert.forward(input_ids, token_type_ids, attention_mask)
    }
}

/// BERT with a single-logit sequence-classification head.
///
/// The head reads the CLS token; callers squash the logit themselves.
pub struct BertClassifier {
    bert: BertModel,
    classifier: Linear,
}

impl BertClassifier {
    pub fn load<P: AsRef<Path>>(model_dir: P, device: &Device) -> Result<Self> {
        let (vb, config) = read_model_dir(model_dir.as_ref(), device)?;
        let bert = load_bert_model(vb.clone(), &config)?;
        let classifier = candle_nn::linear(config.hidden_size, 1, vb.pp("classifier"))?;

        Ok(Self { bert, classifier })
    }

    /// Returns raw logits of shape `[batch, 1]`.
    pub fn forward(
        &self,
        input_ids: &Tensor,
        token_type_ids: &Tensor,
        attention_mask: Option<&Tensor>,
    ) -> Result<Tensor> {
        let output = self
            .bert
            .forward(input_ids, token_type_ids, attention_mask)?;
        let cls_token = output.i((.., 0, ..))?;
        self.classifier.forward(&cls_token)
    }
}
