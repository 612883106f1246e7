/// A canned assistant reply, selected when any keyword occurs in the message
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub keywords: &'static [&'static str],
    pub response: &'static str,
}

impl Rule {
    #[inline]
    fn matches(&self, message: &str) -> bool {
        self.keywords.iter().any(|keyword| message.contains(keyword))
    }
}

const DEFAULT_RULES: &[Rule] = &[
    Rule {
        keywords: &["waterfall", "hundru"],
        response: "Hundru Falls is about 45 km from Ranchi and drops 98 meters. \
                   Visit during the monsoon (July to October) for the strongest flow; \
                   the trek down is of moderate difficulty. Want nearby attractions \
                   or a route plan?",
    },
    Rule {
        keywords: &["cultural", "tribe"],
        response: "For culture, visit the Santhal villages near Dumka, the Tribal \
                   Research Institute in Ranchi and a local Sarhul festival. The Sohrai \
                   paintings of Hazaribagh are worth the detour. Shall I draft a \
                   3-day cultural itinerary?",
    },
    Rule {
        keywords: &["food", "eat"],
        response: "Try Dhuska, Chilka Roti, bamboo shoot curry and Mahua flowers, and \
                   finish with Anarsa or Thekua. I can point you to restaurants with \
                   traditional food or to homestays that cook with guests.",
    },
    Rule {
        keywords: &["budget", "cheap"],
        response: "Jharkhand is easy on the wallet: homestays run Rs 800-1500 a night, \
                   local transport is inexpensive and street food is excellent. What \
                   budget range should I plan around?",
    },
];

const FALLBACK_RESPONSE: &str = "Jharkhand has waterfalls, tribal culture and deep \
                                 forests to explore. Would you like recommendations for \
                                 adventure, culture or nature?";

/// Keyword-driven assistant
///
/// Rules are tried in order; the first one with a keyword contained in the
/// lowercased message wins.
#[derive(Debug, Clone)]
pub struct Assistant {
    rules: Vec<Rule>,
    fallback: &'static str,
}

impl Assistant {
    pub fn new(rules: Vec<Rule>, fallback: &'static str) -> Self {
        Self { rules, fallback }
    }

    /// Reply to a message, or `None` for a blank message
    pub fn reply(&self, message: &str) -> Option<&'static str> {
        let message = message.trim();
        if message.is_empty() {
            return None;
        }

        let message = message.to_lowercase();
        let response = self
            .rules
            .iter()
            .find(|rule| rule.matches(&message))
            .map(|rule| rule.response)
            .unwrap_or(self.fallback);

        Some(response)
    }
}

impl Default for Assistant {
    fn default() -> Self {
        Self::new(DEFAULT_RULES.to_vec(), FALLBACK_RESPONSE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_reply() {
        let assistant = Assistant::default();
        let reply = assistant.reply("What are the best WATERFALLS?").unwrap();
        assert!(reply.contains("Hundru Falls"));
    }

    #[test]
    fn test_first_rule_wins() {
        let assistant = Assistant::default();
        // Mentions both food and a waterfall; the waterfall rule comes first
        let reply = assistant.reply("where to eat near hundru").unwrap();
        assert!(reply.contains("Hundru Falls"));
    }

    #[test]
    fn test_fallback() {
        let assistant = Assistant::default();
        assert_eq!(assistant.reply("hello there"), Some(FALLBACK_RESPONSE));
    }

    #[test]
    fn test_blank_message() {
        let assistant = Assistant::default();
        assert_eq!(assistant.reply("   "), None);
    }

    #[test]
    fn test_custom_rules() {
        let assistant = Assistant::new(
            vec![Rule { keywords: &["ping"], response: "pong" }],
            "?",
        );
        assert_eq!(assistant.reply("Ping!"), Some("pong"));
        assert_eq!(assistant.reply("other"), Some("?"));
    }
}
