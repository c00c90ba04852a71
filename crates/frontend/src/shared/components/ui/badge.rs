use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeTone {
    Primary,
    Success,
    Warning,
    Error,
    Neutral,
}

impl BadgeTone {
    pub fn class(self) -> &'static str {
        match self {
            BadgeTone::Primary => "badge--primary",
            BadgeTone::Success => "badge--success",
            BadgeTone::Warning => "badge--warning",
            BadgeTone::Error => "badge--error",
            BadgeTone::Neutral => "badge--neutral",
        }
    }

    /// Цвет по значению статуса из API
    pub fn for_status(value: &str) -> Self {
        match value {
            "active" | "completed" => BadgeTone::Success,
            "in_progress" => BadgeTone::Warning,
            "new" => BadgeTone::Primary,
            "inactive" | "blocked" | "cancelled" => BadgeTone::Error,
            _ => BadgeTone::Neutral,
        }
    }
}

#[component]
pub fn Badge(
    #[prop(optional)] tone: Option<BadgeTone>,
    children: Children,
) -> impl IntoView {
    let tone = tone.unwrap_or(BadgeTone::Neutral);
    view! {
        <span class=format!("badge {}", tone.class())>
            {children()}
        </span>
    }
}

/// Бейдж статуса: цвет по значению, текст из подписи
#[component]
pub fn StatusBadge(
    #[prop(into)] value: String,
    #[prop(into)] label: String,
) -> impl IntoView {
    let tone = BadgeTone::for_status(&value);
    view! {
        <span class=format!("badge badge--status {}", tone.class()) data-status=value>
            {label}
        </span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_values_get_tones() {
        assert_eq!(BadgeTone::for_status("completed"), BadgeTone::Success);
        assert_eq!(BadgeTone::for_status("blocked"), BadgeTone::Error);
        assert_eq!(BadgeTone::for_status("in_progress"), BadgeTone::Warning);
        assert_eq!(BadgeTone::for_status("???"), BadgeTone::Neutral);
    }
}
