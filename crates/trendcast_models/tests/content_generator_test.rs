//! Tests for keyword refinement and post generation.

mod test_utils;

use std::sync::Arc;
use test_utils::MockTextModel;
use trendcast_core::{KeywordSet, Topic};
use trendcast_error::TrendcastErrorKind;
use trendcast_models::ContentGenerator;

fn generator(model: &Arc<MockTextModel>) -> ContentGenerator {
    ContentGenerator::new(model.clone())
}

#[tokio::test]
async fn test_refine_keywords_splits_and_trims() -> anyhow::Result<()> {
    let model = Arc::new(MockTextModel::scripted(["a, b ,c"]));
    let keywords = generator(&model)
        .refine_keywords(&Topic::from("Hyderabad"))
        .await?;

    assert_eq!(keywords.as_slice(), ["a", "b", "c"]);
    assert!(model.prompts()[0].contains("for the topic: 'Hyderabad'"));
    Ok(())
}

#[tokio::test]
async fn test_refine_keywords_keeps_duplicates_and_order() -> anyhow::Result<()> {
    let model = Arc::new(MockTextModel::scripted(["biryani, charminar, biryani"]));
    let keywords = generator(&model)
        .refine_keywords(&Topic::from("Hyderabad"))
        .await?;

    assert_eq!(keywords.as_slice(), ["biryani", "charminar", "biryani"]);
    Ok(())
}

#[tokio::test]
async fn test_trend_context_reaches_keyword_prompt() -> anyhow::Result<()> {
    let model = Arc::new(MockTextModel::scripted(["x"]));
    let context = vec!["hyderabad metro".to_string()];
    generator(&model)
        .refine_keywords_with_context(&Topic::from("Hyderabad"), &context)
        .await?;

    assert!(model.prompts()[0].contains("hyderabad metro"));
    Ok(())
}

#[tokio::test]
async fn test_generate_posts_splits_on_delimiter() -> anyhow::Result<()> {
    let model = Arc::new(MockTextModel::scripted([" post1 ---post2--- post3"]));
    let keywords = KeywordSet::from_comma_separated("a, b");
    let posts = generator(&model)
        .generate_posts(&Topic::from("Hyderabad"), &keywords)
        .await?;

    assert_eq!(posts, ["post1", "post2", "post3"]);
    Ok(())
}

#[tokio::test]
async fn test_generate_posts_without_delimiter_yields_one_post() -> anyhow::Result<()> {
    let model = Arc::new(MockTextModel::scripted(["just one post"]));
    let posts = generator(&model)
        .generate_posts(&Topic::from("Hyderabad"), &KeywordSet::default())
        .await?;

    assert_eq!(posts, ["just one post"]);
    Ok(())
}

#[tokio::test]
async fn test_post_content_uses_refined_keywords() -> anyhow::Result<()> {
    let model = Arc::new(MockTextModel::scripted([
        "Hyderabad history, charminar",
        "first---second---third",
    ]));
    let (posts, keywords) = generator(&model)
        .generate_post_content(&Topic::from("Hyderabad"))
        .await?;

    assert_eq!(posts.len(), 3);
    assert_eq!(keywords.as_slice(), ["Hyderabad history", "charminar"]);
    assert_eq!(model.call_count(), 2);
    assert!(model.prompts()[1].contains("Keywords: Hyderabad history, charminar."));
    Ok(())
}

#[tokio::test]
async fn test_extract_image_keyword_trims_answer() -> anyhow::Result<()> {
    let model = Arc::new(MockTextModel::scripted(["  google data center \n"]));
    let keyword = generator(&model)
        .extract_image_keyword(&Topic::from("new google data center in vizag"))
        .await?;

    assert_eq!(keyword.as_str(), "google data center");
    Ok(())
}

#[tokio::test]
async fn test_model_errors_propagate() {
    let model = Arc::new(MockTextModel::failing());
    let result = generator(&model)
        .generate_post_content(&Topic::from("Hyderabad"))
        .await;

    let err = result.expect_err("model failure should surface");
    assert!(matches!(err.kind(), TrendcastErrorKind::Gemini(_)));
    assert_eq!(model.call_count(), 1);
}

#[tokio::test]
async fn test_blank_answers_pass_through_unvalidated() -> anyhow::Result<()> {
    let model = Arc::new(MockTextModel::scripted(["   ", ""]));
    let generator = generator(&model);
    let topic = Topic::from("Hyderabad");

    let keyword = generator.extract_image_keyword(&topic).await?;
    assert_eq!(keyword.as_str(), "");

    let keywords = generator.refine_keywords(&topic).await?;
    assert_eq!(keywords.as_slice(), [""]);
    Ok(())
}
