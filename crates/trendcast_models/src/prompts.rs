//! Prompt templates sent to the text model.

use trendcast_core::{KeywordSet, Topic};

pub(crate) fn image_keyword_prompt(topic: &Topic) -> String {
    format!(
        "Extract the most visually relevant keywords from the following topic for an image search. \
         Focus on the core subject. For example, from 'new google data center in vizag', extract \
         'google data center'. From 'latest advancements in AI technology', extract 'AI technology'. \
         Topic: '{}'. Output only the keywords.",
        topic
    )
}

pub(crate) fn keyword_prompt(topic: &Topic, trend_context: &[String]) -> String {
    let mut prompt = format!(
        "Generate a list of 5-10 highly relevant and engaging keywords for the topic: '{}'. \
         Focus on broader concepts and avoid overly specific or local queries. For example, for \
         'Hyderabad', good keywords would be 'Hyderabad history', 'charminar', 'hyderabadi biryani', \
         'telangana tourism'. Return as a comma-separated list.",
        topic
    );
    if !trend_context.is_empty() {
        prompt.push_str(&format!(
            " Currently popular related searches: {}.",
            trend_context.join(", ")
        ));
    }
    prompt
}

pub(crate) fn posts_prompt(topic: &Topic, keywords: &KeywordSet) -> String {
    format!(
        "Topic: '{}'. Keywords: {}. Generate exactly three distinct social media posts, each under \
         280 characters. Separate each post with '---'. Output only the raw post text. No other \
         text, headings, or explanations.",
        topic,
        keywords.joined()
    )
}
