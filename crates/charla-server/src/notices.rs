//! Locally-generated answers that never reach the model.
//!
//! Same shape as the relay's fallback catalog: lead language per the request
//! flag, signature line at the end.

use charla_core::Lang;

/// 429 body: too many requests from this address.
pub fn rate_limited(lang: Lang, signature: &str) -> String {
    let body = match lang {
        Lang::Es => "Demasiadas preguntas por ahora. Inténtalo de nuevo en un minuto. / Too many questions right now. Try again in a minute.",
        Lang::En => "Too many questions right now. Try again in a minute. / Demasiadas preguntas por ahora. Inténtalo de nuevo en un minuto.",
    };
    sign(body, signature)
}

/// The policy guard declined the question.
pub fn blocked(lang: Lang, signature: &str) -> String {
    let body = match lang {
        Lang::Es => "No puedo ayudar con ese tema. / I can't help with that topic.",
        Lang::En => "I can't help with that topic. / No puedo ayudar con ese tema.",
    };
    sign(body, signature)
}

/// The question was empty or whitespace; nothing to relay.
pub fn empty_question(lang: Lang, signature: &str) -> String {
    let body = match lang {
        Lang::Es => "Escribe una pregunta para empezar. / Type a question to get started.",
        Lang::En => "Type a question to get started. / Escribe una pregunta para empezar.",
    };
    sign(body, signature)
}

fn sign(body: &str, signature: &str) -> String {
    if signature.is_empty() {
        body.to_string()
    } else {
        format!("{body}\n\n{signature}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notices_carry_signature() {
        for notice in [
            rate_limited(Lang::Es, "— Charla"),
            blocked(Lang::En, "— Charla"),
            empty_question(Lang::Es, "— Charla"),
        ] {
            assert!(notice.ends_with("— Charla"));
        }
    }

    #[test]
    fn test_lang_decides_leading_language() {
        assert!(rate_limited(Lang::En, "").starts_with("Too many"));
        assert!(rate_limited(Lang::Es, "").starts_with("Demasiadas"));
    }
}
