//! Classification behavior against a scripted model.

use std::sync::Arc;

use revisor_model::MockModel;
use revisor_pipeline::{ClassificationError, Classifier, Label};

async fn classify_with_reply(reply: &str) -> Result<Label, ClassificationError> {
    let model = Arc::new(MockModel::with_reply(reply));
    Classifier::new(model).classify("Manejo de soja em lavouras do Cerrado").await
}

#[tokio::test]
async fn plain_keywords_map_to_labels() {
    assert_eq!(classify_with_reply("PRODUTO").await.unwrap(), Label::Product);
    assert_eq!(classify_with_reply("CULTURA").await.unwrap(), Label::Crop);
    assert_eq!(classify_with_reply("OUTROS").await.unwrap(), Label::Other);
}

#[tokio::test]
async fn lowercase_and_noisy_replies_are_normalized() {
    assert_eq!(classify_with_reply("produto").await.unwrap(), Label::Product);
    assert_eq!(
        classify_with_reply("A categoria é: cultura.").await.unwrap(),
        Label::Crop
    );
}

#[tokio::test]
async fn priority_order_product_over_crop_over_other() {
    assert_eq!(
        classify_with_reply("Pode ser CULTURA ou PRODUTO").await.unwrap(),
        Label::Product
    );
    assert_eq!(
        classify_with_reply("OUTROS, talvez CULTURA").await.unwrap(),
        Label::Crop
    );
}

#[tokio::test]
async fn unrecognized_reply_carries_raw_text() {
    let err = classify_with_reply("categoria desconhecida").await.unwrap_err();
    match err {
        ClassificationError::Unrecognized { reply } => {
            assert_eq!(reply, "CATEGORIA DESCONHECIDA");
        }
        other => panic!("expected Unrecognized, got: {other}"),
    }
}

#[tokio::test]
async fn model_failure_is_not_unrecognized() {
    let model = Arc::new(MockModel::failing());
    let err = Classifier::new(model).classify("texto").await.unwrap_err();
    assert!(matches!(err, ClassificationError::Model(_)));
}

#[tokio::test]
async fn taxonomy_prompt_embeds_the_document() {
    let model = Arc::new(MockModel::with_reply("OUTROS"));
    Classifier::new(model.clone()).classify("Manual de boas práticas").await.unwrap();

    let prompt = model.prompts().pop().unwrap();
    assert!(prompt.contains("Manual de boas práticas"));
    assert!(prompt.contains("PRODUTO"));
    assert!(prompt.contains("CULTURA"));
    assert!(prompt.contains("OUTROS"));
}
