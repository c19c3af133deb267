//! Persona selection ("agent routing").
//!
//! Picks which system prompt fronts the upstream call. The shipped router is
//! static pattern matching (a slash command or keyword lookup) behind the
//! [`PersonaRouter`] trait so a classifier-backed implementation can slot in
//! later without touching the handler. Routing accuracy is inherently
//! probabilistic and stays outside the core's test surface; the mechanics
//! are tested here.

use async_trait::async_trait;
use charla_core::Lang;

/// A selectable system-prompt persona.
#[derive(Debug)]
pub struct Persona {
    /// Stable identifier, also the slash command that forces it.
    pub id: &'static str,
    keywords: &'static [&'static str],
    instructions: &'static str,
}

impl Persona {
    /// Render the full system prompt for this persona.
    ///
    /// The `lang` flag decides which language the model leads with; the
    /// signature line is what every answer must end with.
    pub fn system_prompt(&self, lang: Lang, signature: &str) -> String {
        let language_rule = match lang {
            Lang::Es => "Responde primero en español y después en inglés.",
            Lang::En => "Answer first in English, then in Spanish.",
        };
        format!(
            "{language_rule} {} Mantén las respuestas breves y amigables; usa párrafos cortos y listas cuando ayuden. Termina cada respuesta con la línea: {signature}",
            self.instructions
        )
    }
}

static PERSONAS: &[Persona] = &[
    Persona {
        id: "general",
        keywords: &[],
        instructions: "Eres un asistente bilingüe que responde preguntas de la comunidad.",
    },
    Persona {
        id: "coach",
        keywords: &[
            "entrenamiento",
            "práctica",
            "baloncesto",
            "basketball",
            "training",
            "drill",
        ],
        instructions: "Eres un entrenador de baloncesto: da consejos prácticos de técnica, práctica y actitud.",
    },
    Persona {
        id: "estudio",
        keywords: &["tarea", "homework", "examen", "estudiar", "study"],
        instructions: "Eres un tutor paciente: explica paso a paso y anima a practicar.",
    },
];

/// Strategy for choosing the persona behind a question.
#[async_trait]
pub trait PersonaRouter: Send + Sync {
    /// Select the persona whose system prompt fronts this question.
    async fn select(&self, question: &str) -> &Persona;
}

/// Static router: slash command first, then keyword lookup, else default.
pub struct KeywordRouter;

impl KeywordRouter {
    fn default_persona() -> &'static Persona {
        &PERSONAS[0]
    }
}

#[async_trait]
impl PersonaRouter for KeywordRouter {
    async fn select(&self, question: &str) -> &Persona {
        let trimmed = question.trim();

        // "/coach how do I..." forces the coach persona.
        if let Some(rest) = trimmed.strip_prefix('/') {
            let command = rest.split_whitespace().next().unwrap_or("");
            if let Some(p) = PERSONAS.iter().find(|p| p.id.eq_ignore_ascii_case(command)) {
                return p;
            }
        }

        let lower = trimmed.to_lowercase();
        PERSONAS
            .iter()
            .find(|p| p.keywords.iter().any(|k| lower.contains(k)))
            .unwrap_or_else(Self::default_persona)
    }
}
