use anyhow::Result;
use fantoccini::elements::Element;
use rand::rngs::OsRng;
use rand::Rng;
use std::time::Duration;
use tokio::time::sleep;

#[derive(Debug, Clone)]
/// Paces keystrokes so form fields receive input the way a person types it.
///
/// Some dashboards debounce or validate per keystroke; sending a whole string
/// at once can race those handlers.
pub struct InputPacer {
    min_key_delay_ms: u64,
    max_key_delay_ms: u64,
}

impl Default for InputPacer {
    fn default() -> Self {
        Self::new(10, 60)
    }
}

impl InputPacer {
    pub fn new(min_key_delay_ms: u64, max_key_delay_ms: u64) -> Self {
        Self {
            min_key_delay_ms,
            max_key_delay_ms,
        }
    }

    /// Sleep for a random duration between `min` and `max` milliseconds.
    pub async fn random_delay(&self, min: u64, max: u64) {
        let mut rng = OsRng;
        let ms = rng.gen_range(min..=max);
        sleep(Duration::from_millis(ms)).await;
    }

    /// Type the provided text with a small random delay between characters.
    pub async fn type_into(&self, element: &Element, text: &str) -> Result<()> {
        for ch in text.chars() {
            element.send_keys(&ch.to_string()).await?;
            self.random_delay(self.min_key_delay_ms, self.max_key_delay_ms)
                .await;
        }
        Ok(())
    }
}
