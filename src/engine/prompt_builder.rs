pub const SYSTEM_INSTRUCTION: &str = "Be professional, concise, and helpful. Your aesthetic is high-end minimalism. Use neutral tones in your descriptions.";

/// The two parts of a chat request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatPrompt {
    pub system: String,
    pub user: String,
}

/// Only formats text; no networking.
pub struct PromptBuilder;

impl PromptBuilder {
    pub fn build(user_text: &str) -> ChatPrompt {
        let mut user = String::new();
        user.push_str("You are SportSync Bot.\n");
        user.push_str(
            "Context: Professional court booking for Badminton, Pickleball, and Basketball.\n",
        );
        user.push_str("Visuals: Modern minimalist White and Gray.\n");
        user.push_str("User: ");
        user.push_str(user_text);

        ChatPrompt {
            system: SYSTEM_INSTRUCTION.to_string(),
            user,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn persona_wraps_user_text() {
        let prompt = PromptBuilder::build("Where can I play pickleball?");
        assert_eq!(prompt.system, SYSTEM_INSTRUCTION);
        assert!(prompt.user.starts_with("You are SportSync Bot.\n"));
        assert!(prompt.user.ends_with("\nUser: Where can I play pickleball?"));
    }
}
