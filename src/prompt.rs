/// Markers that would let a topic escape the instruction template.
pub const DISALLOWED_PATTERNS: [&str; 4] = ["[inst]", "[/inst]", "<|", "{{"];

/// Maximum topic length, in characters, after sanitization.
pub const MAX_TOPIC_LENGTH: usize = 200;

/// Sanitizes a caller-supplied blog topic.
/// Returns the cleaned topic or a message describing why it was rejected.
pub fn sanitize_topic(raw: &str) -> Result<String, String> {
    let cleaned = raw
        .chars()
        .filter(|&c| !c.is_control())
        .collect::<String>()
        .trim()
        .to_string();

    if cleaned.is_empty() {
        return Err("Blog topic is required.".to_string());
    }

    if cleaned.chars().count() > MAX_TOPIC_LENGTH {
        return Err(format!(
            "Blog topic exceeds maximum length of {} characters",
            MAX_TOPIC_LENGTH
        ));
    }

    let lowered = cleaned.to_lowercase();
    for pattern in DISALLOWED_PATTERNS.iter() {
        if lowered.contains(pattern) {
            return Err(format!("Blog topic contains disallowed pattern: {}", pattern));
        }
    }

    Ok(cleaned)
}

/// Builds the model instruction for a blog post about `topic`.
pub fn build_blog_prompt(topic: &str) -> String {
    format!(
        "Write a comprehensive blog post on \"{topic}\" in markdown format. \
        Use appropriate markdown syntax, including:\n\
        \n\
        - Headings (#, ##, ###)\n\
        - Bullet points (*, -)\n\
        - Numbered lists (1., 2., 3.)\n\
        - Code blocks (```) for any code snippets\n\
        - Italics (*) and bold (**) for emphasis\n\
        - Hyperlinks ([text](URL)) where relevant\n\
        - Image placeholders (![alt text](image-url-placeholder)) if applicable\n\
        \n\
        Cover the topic in depth with practical examples and real-world applications. \
        Write as a technology expert, in professional yet accessible language, \
        organized under clear subheadings. Begin with an engaging introduction \
        and end with a short summary or call to action. \
        Output only the blog post."
    )
}
