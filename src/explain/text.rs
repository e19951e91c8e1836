use serde::{Serialize, Serializer};

const URGENCY: [&str; 3] = ["urgent", "immediately", "within"];
const VERIFICATION: [&str; 2] = ["verify", "update"];
// Plain substring match: "pin" also hits "shopping" or "spin".
const SENSITIVE: [&str; 3] = ["password", "otp", "pin"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextReason {
    Urgency,
    VerificationRequest,
    SensitiveInfo,
    /// Fallback when nothing else fired.
    LegitimatePattern,
}

impl TextReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            TextReason::Urgency => "Contains urgency-based language",
            TextReason::VerificationRequest => "Requests account verification",
            TextReason::SensitiveInfo => "Asks for sensitive information",
            TextReason::LegitimatePattern => "Text pattern similar to legitimate messages",
        }
    }
}

impl AsRef<str> for TextReason {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl Serialize for TextReason {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(self.as_str())
    }
}

fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|n| haystack.contains(n))
}

/// Never empty.
pub fn explain_text(text: &str) -> Vec<TextReason> {
    let lower = text.to_lowercase();
    let mut reasons = Vec::new();

    if contains_any(&lower, &URGENCY) {
        reasons.push(TextReason::Urgency);
    }
    if contains_any(&lower, &VERIFICATION) {
        reasons.push(TextReason::VerificationRequest);
    }
    if contains_any(&lower, &SENSITIVE) {
        reasons.push(TextReason::SensitiveInfo);
    }

    if reasons.is_empty() {
        reasons.push(TextReason::LegitimatePattern);
    }
    reasons
}
