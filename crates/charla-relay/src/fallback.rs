//! Localized fallback answers.
//!
//! Whatever happens upstream, the widget must receive something displayable.
//! These templates mirror the tone the system prompt asks the model for:
//! lead language per the request's `lang` flag, and the configured signature
//! line at the end (model answers carry it because the prompt says so;
//! fallbacks hardcode it).

use charla_core::Lang;

use crate::error::RelayError;

/// Map a relay failure to its user-facing answer.
pub fn for_error(err: &RelayError, lang: Lang, signature: &str) -> String {
    match err {
        RelayError::MissingCredential => missing_credential(lang, signature),
        RelayError::UpstreamStatus { snippet, .. } => unavailable(lang, snippet, signature),
        RelayError::Parse(detail) => temporary(lang, detail, signature),
        RelayError::Transport(detail) => network(lang, detail, signature),
        RelayError::Timeout => timed_out(lang, signature),
    }
}

/// Service not configured yet; no call was attempted.
pub fn missing_credential(lang: Lang, signature: &str) -> String {
    let body = match lang {
        Lang::Es => "El servicio aún no está configurado. Inténtalo de nuevo pronto. / The service is not configured yet. Please try again soon.",
        Lang::En => "The service is not configured yet. Please try again soon. / El servicio aún no está configurado. Inténtalo de nuevo pronto.",
    };
    sign(body, signature)
}

/// Provider answered non-2xx.
pub fn unavailable(lang: Lang, snippet: &str, signature: &str) -> String {
    let body = match lang {
        Lang::Es => format!(
            "El modelo no está disponible. Inténtalo más tarde. / Model unavailable. Try again later.\n(detalle: {snippet})"
        ),
        Lang::En => format!(
            "Model unavailable. Try again later. / El modelo no está disponible. Inténtalo más tarde.\n(detail: {snippet})"
        ),
    };
    sign(&body, signature)
}

/// Something unexpected in an otherwise-successful exchange.
pub fn temporary(lang: Lang, detail: &str, signature: &str) -> String {
    let body = match lang {
        Lang::Es => format!(
            "Error temporal. Inténtalo de nuevo. / Temporary error. Try again.\n(detalle: {detail})"
        ),
        Lang::En => format!(
            "Temporary error. Try again. / Error temporal. Inténtalo de nuevo.\n(detail: {detail})"
        ),
    };
    sign(&body, signature)
}

/// The network failed before the provider could answer.
pub fn network(lang: Lang, detail: &str, signature: &str) -> String {
    let body = match lang {
        Lang::Es => format!(
            "Error de red. Inténtalo de nuevo. / Network error. Try again.\n(detalle: {detail})"
        ),
        Lang::En => format!(
            "Network error. Try again. / Error de red. Inténtalo de nuevo.\n(detail: {detail})"
        ),
    };
    sign(&body, signature)
}

/// The bounded deadline elapsed.
pub fn timed_out(lang: Lang, signature: &str) -> String {
    let body = match lang {
        Lang::Es => "Se agotó el tiempo de espera. Inténtalo de nuevo. / Timed out. Try again.",
        Lang::En => "Timed out. Try again. / Se agotó el tiempo de espera. Inténtalo de nuevo.",
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

    const SIG: &str = "— Charla";

    #[test]
    fn test_every_fallback_ends_with_signature() {
        let errors = [
            RelayError::MissingCredential,
            RelayError::UpstreamStatus {
                status: 503,
                snippet: "Service overloaded".to_string(),
            },
            RelayError::Parse("missing field".to_string()),
            RelayError::Transport("connection refused".to_string()),
            RelayError::Timeout,
        ];
        for err in &errors {
            for lang in [Lang::Es, Lang::En] {
                let answer = for_error(err, lang, SIG);
                assert!(!answer.is_empty());
                assert!(answer.ends_with(SIG), "missing signature: {answer}");
            }
        }
    }

    #[test]
    fn test_unavailable_embeds_snippet() {
        let answer = unavailable(Lang::En, "Service overloaded", SIG);
        assert!(answer.contains("unavailable"));
        assert!(answer.contains("Service overloaded"));
    }

    #[test]
    fn test_lang_decides_leading_language() {
        assert!(timed_out(Lang::Es, SIG).starts_with("Se agotó"));
        assert!(timed_out(Lang::En, SIG).starts_with("Timed out"));
    }

    #[test]
    fn test_empty_signature_omits_trailer() {
        let answer = timed_out(Lang::Es, "");
        assert!(!answer.ends_with('\n'));
    }
}
