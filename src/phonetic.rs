use rphonetic::DoubleMetaphone;
use serde::{Deserialize, Serialize};

/// One or two sound-alike codes for a name; the primary always comes first
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhoneticCodes {
    pub primary: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alternate: Option<String>,
}

impl PhoneticCodes {
    /// Build from a primary and an optional alternate code.
    ///
    /// Empty alternates and alternates equal to the primary are dropped.
    pub fn new(primary: impl Into<String>, alternate: Option<String>) -> Self {
        let primary = primary.into();
        let alternate = alternate.filter(|alt| !alt.is_empty() && *alt != primary);
        Self { primary, alternate }
    }

    pub fn is_empty(&self) -> bool {
        self.primary.is_empty() && self.alternate.is_none()
    }

    /// Non-empty codes, primary first
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.primary.as_str())
            .chain(self.alternate.as_deref())
            .filter(|code| !code.is_empty())
    }
}

/// Trait for phonetic code providers
pub trait PhoneticEncoder: Send + Sync {
    /// Encode a name or query into sound-alike codes
    fn encode(&self, text: &str) -> PhoneticCodes;

    /// Get encoder name for logging
    fn name(&self) -> &str;
}

/// Double Metaphone encoder backed by `rphonetic`
pub struct DoubleMetaphoneEncoder;

impl DoubleMetaphoneEncoder {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DoubleMetaphoneEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl PhoneticEncoder for DoubleMetaphoneEncoder {
    fn encode(&self, text: &str) -> PhoneticCodes {
        let text = text.trim();
        if text.is_empty() {
            return PhoneticCodes::default();
        }

        // rphonetic can panic on unusual input; a name without codes is still rankable.
        let result = std::panic::catch_unwind(|| DoubleMetaphone::default().double_metaphone(text));
        match result {
            Ok(codes) => PhoneticCodes::new(codes.primary(), Some(codes.alternate())),
            Err(_) => {
                tracing::warn!("⚠️ Double Metaphone panicked on input: {:?}", text);
                PhoneticCodes::default()
            }
        }
    }

    fn name(&self) -> &str {
        "double-metaphone"
    }
}

/// Encoder that yields no codes, disabling the phonetic signal
pub struct NoPhonetics;

impl PhoneticEncoder for NoPhonetics {
    fn encode(&self, _text: &str) -> PhoneticCodes {
        PhoneticCodes::default()
    }

    fn name(&self) -> &str {
        "none"
    }
}
