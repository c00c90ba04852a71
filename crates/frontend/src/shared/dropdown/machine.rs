//! Автомат состояний одного выпадающего списка.
//!
//! `Closed ⇄ Open`, а внутри `Open` есть фаза асинхронной смены статуса:
//! `Idle → Pending → Closing | Failed`. Пока идёт `Pending`, список
//! заблокирован: повторный выбор и закрытие игнорируются.

/// Задержка автозакрытия после успешной смены статуса, мс
pub const STATUS_CLOSE_DELAY_MS: u32 = 1500;

/// Сколько показывается галочка по внешнему сигналу `show_success`, мс
pub const SUCCESS_FLASH_MS: u32 = 2000;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CommitPhase {
    #[default]
    Idle,
    /// Ждём ответа колбэка смены статуса
    Pending { value: String },
    /// Статус применён: показываем галочку и ждём автозакрытия
    Closing,
    /// Колбэк вернул ошибку: список открыт для повторной попытки
    Failed { message: String },
}

/// Что должен сделать компонент после выбора варианта
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectOutcome {
    /// Выбрано текущее значение: список закрыт, колбэки не вызываются
    Closed,
    /// Вызвать синхронный `on_change` (список уже закрыт)
    Changed(String),
    /// Вызвать асинхронный колбэк смены статуса и дождаться его
    Commit(String),
    /// Выбор проигнорирован
    Ignored,
}

/// Разрешение на отложенное закрытие, привязанное к сессии открытия.
/// Таймер от прошлого открытия не закроет список, открытый заново.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CloseTicket {
    session: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DropdownMachine {
    open: bool,
    session: u64,
    query: String,
    phase: CommitPhase,
}

impl DropdownMachine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn phase(&self) -> &CommitPhase {
        &self.phase
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.phase, CommitPhase::Pending { .. })
    }

    /// Варианты недоступны для выбора
    pub fn is_locked(&self) -> bool {
        matches!(
            self.phase,
            CommitPhase::Pending { .. } | CommitPhase::Closing
        )
    }

    pub fn pending_value(&self) -> Option<&str> {
        match &self.phase {
            CommitPhase::Pending { value } => Some(value),
            _ => None,
        }
    }

    pub fn commit_succeeded(&self) -> bool {
        self.phase == CommitPhase::Closing
    }

    pub fn commit_error(&self) -> Option<&str> {
        match &self.phase {
            CommitPhase::Failed { message } => Some(message),
            _ => None,
        }
    }

    /// Возвращает `true`, если список действительно открылся
    pub fn open(&mut self) -> bool {
        if self.open {
            return false;
        }
        self.open = true;
        self.session += 1;
        self.query.clear();
        self.phase = CommitPhase::Idle;
        true
    }

    /// Возвращает `true`, если список действительно закрылся.
    /// Во время `Pending` закрытие запрещено.
    pub fn close(&mut self) -> bool {
        if !self.open || self.is_pending() {
            return false;
        }
        self.open = false;
        self.query.clear();
        self.phase = CommitPhase::Idle;
        true
    }

    /// Нажатие на кнопку. `disabled` не мешает закрыть уже открытый список.
    pub fn toggle(&mut self, disabled: bool) -> bool {
        if self.open {
            self.close()
        } else if disabled {
            false
        } else {
            self.open()
        }
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        if self.open {
            self.query = query.into();
        }
    }

    /// Нажатие мыши вне кнопки и панели закрывает список.
    /// Возвращает `true`, если список закрылся.
    pub fn dismiss_outside(&mut self, inside_anchor: bool, inside_overlay: bool) -> bool {
        if inside_anchor || inside_overlay {
            return false;
        }
        self.close()
    }

    /// Выбор в обычном списке: сразу `on_change` и закрытие.
    /// `disabled` (внешняя блокировка) отменяет выбор, список остаётся открытым.
    pub fn select_plain(&mut self, value: &str, disabled: bool) -> SelectOutcome {
        if !self.open || disabled || self.is_locked() {
            return SelectOutcome::Ignored;
        }
        self.close();
        SelectOutcome::Changed(value.to_string())
    }

    /// Выбор в списке статусов.
    ///
    /// * внешняя блокировка (`disabled`): выбор игнорируется;
    /// * то же значение: просто закрыть;
    /// * без асинхронного колбэка: как обычный список;
    /// * иначе: перейти в `Pending` и вернуть `Commit`.
    pub fn select_status(
        &mut self,
        current: Option<&str>,
        value: &str,
        has_commit: bool,
        disabled: bool,
    ) -> SelectOutcome {
        if !self.open || disabled || self.is_locked() {
            return SelectOutcome::Ignored;
        }
        if current == Some(value) {
            self.close();
            return SelectOutcome::Closed;
        }
        if !has_commit {
            self.close();
            return SelectOutcome::Changed(value.to_string());
        }
        self.phase = CommitPhase::Pending {
            value: value.to_string(),
        };
        SelectOutcome::Commit(value.to_string())
    }

    /// Результат асинхронного колбэка. При успехе возвращает билет
    /// на закрытие через [`STATUS_CLOSE_DELAY_MS`].
    pub fn settle(&mut self, result: Result<(), String>) -> Option<CloseTicket> {
        if !self.is_pending() {
            return None;
        }
        match result {
            Ok(()) => {
                self.phase = CommitPhase::Closing;
                Some(CloseTicket {
                    session: self.session,
                })
            }
            Err(message) => {
                self.phase = CommitPhase::Failed { message };
                None
            }
        }
    }

    /// Срабатывание таймера автозакрытия
    pub fn finish_close(&mut self, ticket: CloseTicket) -> bool {
        if ticket.session != self.session || !self.commit_succeeded() {
            return false;
        }
        self.close()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opened() -> DropdownMachine {
        let mut m = DropdownMachine::new();
        assert!(m.open());
        m
    }

    #[test]
    fn toggle_opens_and_closes() {
        let mut m = DropdownMachine::new();
        assert!(m.toggle(false));
        assert!(m.is_open());
        assert!(m.toggle(false));
        assert!(!m.is_open());
    }

    #[test]
    fn disabled_trigger_does_not_open() {
        let mut m = DropdownMachine::new();
        assert!(!m.toggle(true));
        assert!(!m.is_open());
    }

    #[test]
    fn repeated_open_and_close_report_no_change() {
        let mut m = opened();
        assert!(!m.open());
        assert!(m.close());
        assert!(!m.close());
    }

    #[test]
    fn plain_selection_emits_change_closes_and_clears_query() {
        let mut m = opened();
        m.set_query("цем");
        assert_eq!(m.select_plain("7", false), SelectOutcome::Changed("7".into()));
        assert!(!m.is_open());
        assert_eq!(m.query(), "");
    }

    #[test]
    fn selection_on_closed_dropdown_is_ignored() {
        let mut m = DropdownMachine::new();
        assert_eq!(m.select_plain("1", false), SelectOutcome::Ignored);
        assert_eq!(m.select_status(None, "1", true, false), SelectOutcome::Ignored);
    }

    #[test]
    fn status_same_value_closes_without_callback() {
        let mut m = opened();
        assert_eq!(
            m.select_status(Some("active"), "active", true, false),
            SelectOutcome::Closed
        );
        assert!(!m.is_open());
        assert_eq!(m.phase(), &CommitPhase::Idle);
    }

    #[test]
    fn status_without_async_callback_behaves_like_plain() {
        let mut m = opened();
        assert_eq!(
            m.select_status(Some("new"), "completed", false, false),
            SelectOutcome::Changed("completed".into())
        );
        assert!(!m.is_open());
    }

    #[test]
    fn status_commit_stays_open_until_ticket_fires() {
        let mut m = opened();
        assert_eq!(
            m.select_status(Some("new"), "completed", true, false),
            SelectOutcome::Commit("completed".into())
        );
        assert!(m.is_open());
        assert_eq!(m.pending_value(), Some("completed"));

        let ticket = m.settle(Ok(())).expect("close ticket");
        assert!(m.is_open());
        assert!(m.commit_succeeded());

        assert!(m.finish_close(ticket));
        assert!(!m.is_open());
        assert_eq!(m.phase(), &CommitPhase::Idle);
    }

    #[test]
    fn pending_commit_blocks_reentry_and_dismissal() {
        let mut m = opened();
        m.select_status(Some("new"), "completed", true, false);

        assert_eq!(
            m.select_status(Some("new"), "cancelled", true, false),
            SelectOutcome::Ignored
        );
        assert_eq!(m.select_plain("x", false), SelectOutcome::Ignored);
        assert!(!m.close());
        assert!(!m.toggle(false));
        assert!(m.is_open());
        assert_eq!(m.pending_value(), Some("completed"));
    }

    #[test]
    fn options_stay_locked_while_success_is_shown() {
        let mut m = opened();
        m.select_status(Some("new"), "completed", true, false);
        m.settle(Ok(()));
        assert_eq!(
            m.select_status(Some("completed"), "new", true, false),
            SelectOutcome::Ignored
        );
        // outside click may still dismiss early
        assert!(m.close());
    }

    #[test]
    fn failed_commit_keeps_list_open_for_retry() {
        let mut m = opened();
        m.select_status(Some("new"), "completed", true, false);
        assert_eq!(m.settle(Err("HTTP 500".into())), None);
        assert!(m.is_open());
        assert_eq!(m.commit_error(), Some("HTTP 500"));

        assert_eq!(
            m.select_status(Some("new"), "completed", true, false),
            SelectOutcome::Commit("completed".into())
        );
        assert_eq!(m.commit_error(), None);
    }

    #[test]
    fn settle_without_pending_is_ignored() {
        let mut m = opened();
        assert_eq!(m.settle(Ok(())), None);
        assert_eq!(m.phase(), &CommitPhase::Idle);
    }

    #[test]
    fn stale_ticket_does_not_close_a_new_session() {
        let mut m = opened();
        m.select_status(Some("a"), "b", true, false);
        let ticket = m.settle(Ok(())).unwrap();

        // user closes early and opens again before the timer fires
        assert!(m.close());
        assert!(m.open());
        assert!(!m.finish_close(ticket));
        assert!(m.is_open());
    }

    #[test]
    fn reopening_resets_error_and_query() {
        let mut m = opened();
        m.set_query("abc");
        m.select_status(Some("a"), "b", true, false);
        m.settle(Err("boom".into()));
        assert!(m.close());
        assert!(m.open());
        assert_eq!(m.query(), "");
        assert_eq!(m.phase(), &CommitPhase::Idle);
    }

    #[test]
    fn delays_match_status_flow() {
        assert_eq!(STATUS_CLOSE_DELAY_MS, 1500);
        assert_eq!(SUCCESS_FLASH_MS, 2000);
    }

    #[test]
    fn picks_are_ignored_while_externally_disabled() {
        let mut m = opened();
        assert_eq!(m.select_plain("7", true), SelectOutcome::Ignored);
        assert_eq!(
            m.select_status(Some("new"), "completed", true, true),
            SelectOutcome::Ignored
        );
        assert!(m.is_open());
        assert_eq!(m.phase(), &CommitPhase::Idle);

        // once the external mutation is over the same pick goes through
        assert_eq!(
            m.select_status(Some("new"), "completed", true, false),
            SelectOutcome::Commit("completed".into())
        );
    }

    #[test]
    fn outside_mousedown_closes_only_outside_both_containers() {
        for (anchor, overlay, closes) in [
            (true, false, false),
            (false, true, false),
            (true, true, false),
            (false, false, true),
        ] {
            let mut m = opened();
            assert_eq!(m.dismiss_outside(anchor, overlay), closes, "{anchor} {overlay}");
            assert_eq!(m.is_open(), !closes);
        }
    }

    #[test]
    fn outside_mousedown_is_ignored_while_pending() {
        let mut m = opened();
        m.select_status(Some("new"), "completed", true, false);
        assert!(!m.dismiss_outside(false, false));
        assert!(m.is_open());
        assert_eq!(m.pending_value(), Some("completed"));

        m.settle(Err("HTTP 500".into()));
        assert!(m.dismiss_outside(false, false));
        assert!(!m.is_open());
    }

    #[test]
    fn outside_mousedown_on_closed_list_does_nothing() {
        let mut m = DropdownMachine::new();
        assert!(!m.dismiss_outside(false, false));
    }

    #[test]
    fn query_is_ignored_while_closed() {
        let mut m = DropdownMachine::new();
        m.set_query("abc");
        assert_eq!(m.query(), "");
    }
}
