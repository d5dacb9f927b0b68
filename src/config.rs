use crate::error::NotifierError;

const RECIPIENTS_KEY: &str = "email_recipients";
const SENDER_KEY: &str = "sender_email";
const COST_ON_RUNNING_KEY: &str = "cost_on_running";

/// Process-wide settings, read once at startup.
#[derive(Debug, PartialEq, Clone)]
pub struct Config {
    pub sender: String,
    pub recipients: Vec<String>,
    pub cost_on_running: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, NotifierError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, NotifierError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let recipients = lookup(RECIPIENTS_KEY)
            .map(|value| parse_recipients(&value))
            .unwrap_or_default();
        if recipients.is_empty() {
            return Err(NotifierError::Config(format!(
                "{} must list at least one address",
                RECIPIENTS_KEY
            )));
        }

        let sender = lookup(SENDER_KEY)
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .ok_or_else(|| NotifierError::Config(format!("{} is not set", SENDER_KEY)))?;

        let cost_on_running = match lookup(COST_ON_RUNNING_KEY) {
            None => false,
            Some(value) => match value.trim().to_ascii_lowercase().as_str() {
                "" | "false" | "0" => false,
                "true" | "1" => true,
                other => {
                    return Err(NotifierError::Config(format!(
                        "{} must be true or false, got {:?}",
                        COST_ON_RUNNING_KEY, other
                    )))
                }
            },
        };

        Ok(Config {
            sender,
            recipients,
            cost_on_running,
        })
    }
}

fn parse_recipients(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|address| !address.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use crate::config::Config;
    use crate::error::NotifierError;
    use std::collections::HashMap;

    fn load(pairs: &[(&str, &str)]) -> Result<Config, NotifierError> {
        let env: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        Config::from_lookup(|key| env.get(key).cloned())
    }

    #[test]
    fn test_from_lookup() {
        let config = load(&[
            ("email_recipients", "ops@example.com, finance@example.com,,"),
            ("sender_email", "notifier@example.com"),
        ]);
        assert_eq!(
            config.unwrap(),
            Config {
                sender: "notifier@example.com".to_string(),
                recipients: vec![
                    "ops@example.com".to_string(),
                    "finance@example.com".to_string()
                ],
                cost_on_running: false,
            }
        );
    }

    #[test]
    fn test_cost_on_running() {
        let config = load(&[
            ("email_recipients", "ops@example.com"),
            ("sender_email", "notifier@example.com"),
            ("cost_on_running", "TRUE"),
        ]);
        assert!(config.unwrap().cost_on_running);

        let config = load(&[
            ("email_recipients", "ops@example.com"),
            ("sender_email", "notifier@example.com"),
            ("cost_on_running", "sometimes"),
        ]);
        assert!(matches!(config, Err(NotifierError::Config(_))));
    }

    #[test]
    fn test_missing_recipients() {
        let config = load(&[("sender_email", "notifier@example.com")]);
        assert!(matches!(config, Err(NotifierError::Config(_))));

        let config = load(&[
            ("email_recipients", " , "),
            ("sender_email", "notifier@example.com"),
        ]);
        assert!(matches!(config, Err(NotifierError::Config(_))));
    }

    #[test]
    fn test_missing_sender() {
        let config = load(&[("email_recipients", "ops@example.com")]);
        assert_eq!(
            config.err().unwrap(),
            NotifierError::Config("sender_email is not set".to_string())
        );
    }
}
