/// Spam-indicative substrings, checked in order against lowercased text.
///
/// "prize" appears twice and several entries overlap ("offer" already covers
/// "special offer"). The list is kept exactly as shipped so verdicts stay
/// compatible with existing inboxes.
pub const SPAM_KEYWORDS: [&str; 27] = [
    "offer",
    "win",
    "prize",
    "free",
    "click",
    "subscribe",
    "loan",
    "credit",
    "cash",
    "lucky",
    "winner",
    "selected",
    "congrat",
    "claim",
    "reward",
    "gift",
    "limited time",
    "urgent",
    "act now",
    "buy now",
    "special offer",
    "discount",
    "deal",
    "expires",
    "lottery",
    "prize",
    "jackpot",
];

/// Keyword-containment spam classifier.
///
/// Matching is case-insensitive and substring based: "winter" matches "win",
/// while "w.i.n" matches nothing. No other normalization is applied.
#[derive(Debug, Default, Clone, Copy)]
pub struct SpamClassifier;

impl SpamClassifier {
    pub fn new() -> Self {
        Self
    }

    pub fn is_spam(&self, content: &str) -> bool {
        self.first_match(content).is_some()
    }

    /// The keyword that decided the verdict, if any.
    pub fn first_match(&self, content: &str) -> Option<&'static str> {
        if content.is_empty() {
            return None;
        }

        let text = content.to_lowercase();
        SPAM_KEYWORDS
            .iter()
            .copied()
            .find(|keyword| text.contains(keyword))
    }

    pub fn keywords(&self) -> &'static [&'static str] {
        &SPAM_KEYWORDS
    }
}

/// Classify a message body. `true` means spam.
pub fn classify(content: &str) -> bool {
    SpamClassifier.is_spam(content)
}
