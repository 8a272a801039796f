//! Controlled PMP topic vocabulary.
//!
//! Analytics topic extraction is a keyword-membership scan against this
//! fixed list (the PMBOK knowledge areas plus common exam techniques), not
//! free-form NLP. The list is product content and therefore Spanish.

/// Topics recognized in assistant messages, in PMBOK order then techniques.
pub const PMP_TOPICS: &[&str] = &[
    "Gestión de Integración del Proyecto",
    "Gestión del Alcance del Proyecto",
    "Gestión del Cronograma del Proyecto",
    "Gestión de los Costos del Proyecto",
    "Gestión de la Calidad del Proyecto",
    "Gestión de los Recursos del Proyecto",
    "Gestión de las Comunicaciones del Proyecto",
    "Gestión de los Riesgos del Proyecto",
    "Gestión de las Adquisiciones del Proyecto",
    "Gestión de los Interesados del Proyecto",
    "Metodologías Ágiles",
    "Gestión de Cambios",
    "Análisis de Valor Ganado",
    "Diagramas de Red",
    "Gestión de Conflictos",
    "Liderazgo de Equipos",
    "Comunicación Efectiva",
    "Negociación",
    "Gestión de Stakeholders",
    "Control de Calidad",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vocabulary_is_fixed_and_unique() {
        assert_eq!(PMP_TOPICS.len(), 20);
        let unique: std::collections::HashSet<_> = PMP_TOPICS.iter().collect();
        assert_eq!(unique.len(), PMP_TOPICS.len());
    }
}
