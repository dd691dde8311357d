use serde::{Deserialize, Serialize};

/// Rendering-agnostic style token for categorical values.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tone {
    Success,
    Warning,
    Danger,
    Info,
    #[default]
    Neutral,
}

impl Tone {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tone::Success => "success",
            Tone::Warning => "warning",
            Tone::Danger => "danger",
            Tone::Info => "info",
            Tone::Neutral => "neutral",
        }
    }
}

/// Maps a status, type or severity string to its tone.
///
/// Matching ignores case, accents and `-`/space vs `_`. Anything unknown is
/// [`Tone::Neutral`].
pub fn status_tone(status: &str) -> Tone {
    match canonical(status).as_str() {
        "completado" | "completed" | "pagado" | "paid" | "entregado" | "delivered" | "activo"
        | "active" | "aprobado" | "approved" | "exitoso" | "success" | "leido" | "read"
        | "pago" | "payment" => Tone::Success,

        "pendiente" | "pending" | "procesando" | "processing" | "en_proceso" | "parcial"
        | "partial" | "no_leido" | "unread" | "media" | "medium" | "warning" | "por_vencer" => {
            Tone::Warning
        }

        "cancelado" | "cancelled" | "canceled" | "fallido" | "failed" | "rechazado"
        | "rejected" | "vencido" | "overdue" | "moroso" | "delinquent" | "suspendido"
        | "suspended" | "critica" | "critical" | "alta" | "high" | "error" => Tone::Danger,

        "enviado" | "shipped" | "sent" | "reembolsado" | "refunded" | "reembolso" | "refund"
        | "nuevo" | "new" | "info" | "baja" | "low" | "cargo" | "charge" => Tone::Info,

        _ => Tone::Neutral,
    }
}

/// Whether an order status means the order is still awaiting completion.
pub fn is_pending(status: &str) -> bool {
    matches!(
        canonical(status).as_str(),
        "pendiente" | "pending" | "procesando" | "processing" | "en_proceso"
    )
}

fn canonical(status: &str) -> String {
    status
        .trim()
        .chars()
        .map(|ch| match ch {
            ' ' | '-' => '_',
            'á' | 'Á' => 'a',
            'é' | 'É' => 'e',
            'í' | 'Í' => 'i',
            'ó' | 'Ó' => 'o',
            'ú' | 'Ú' | 'ü' | 'Ü' => 'u',
            other => other,
        })
        .flat_map(char::to_lowercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_statuses() {
        assert_eq!(status_tone("Completado"), Tone::Success);
        assert_eq!(status_tone("paid"), Tone::Success);
        assert_eq!(status_tone("Pendiente"), Tone::Warning);
        assert_eq!(status_tone("Cancelado"), Tone::Danger);
        assert_eq!(status_tone("Enviado"), Tone::Info);
    }

    #[test]
    fn test_matching_is_lenient_on_shape() {
        assert_eq!(status_tone("  EN PROCESO "), Tone::Warning);
        assert_eq!(status_tone("en-proceso"), Tone::Warning);
        assert_eq!(status_tone("Leído"), Tone::Success);
        assert_eq!(status_tone("No leído"), Tone::Warning);
        assert_eq!(status_tone("Crítica"), Tone::Danger);
    }

    #[test]
    fn test_unknown_is_neutral() {
        assert_eq!(status_tone(""), Tone::Neutral);
        assert_eq!(status_tone("NO_DICE"), Tone::Neutral);
        assert_eq!(status_tone("algo raro"), Tone::Neutral);
        assert_eq!(Tone::default(), Tone::Neutral);
    }

    #[test]
    fn test_is_pending() {
        assert!(is_pending("Pendiente"));
        assert!(is_pending("processing"));
        assert!(!is_pending("Completado"));
        assert!(!is_pending(""));
    }
}
