//! Toast notifications.
//!
//! Every toast has its own lifetime: `Visible` until its exit timer fires,
//! `Exiting` while the slide-out animation runs, then removed. Removal is
//! idempotent, so a timer firing after a manual dismiss does nothing.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ToastId(pub u64);

impl fmt::Display for ToastId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastPhase {
    Visible,
    Exiting,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: ToastId,
    pub title: String,
    pub description: String,
    pub phase: ToastPhase,
}

#[derive(Clone, Debug, Default)]
pub struct ToastStack {
    next_id: u64,
    toasts: Vec<Toast>,
}

impl ToastStack {
    pub fn push(&mut self, title: impl Into<String>, description: impl Into<String>) -> ToastId {
        self.next_id += 1;
        let id = ToastId(self.next_id);
        self.toasts.push(Toast {
            id,
            title: title.into(),
            description: description.into(),
            phase: ToastPhase::Visible,
        });
        debug!(%id, open = self.toasts.len(), "toast shown");
        id
    }

    /// Start the exit animation. `false` if the toast is gone or already
    /// exiting.
    pub fn begin_exit(&mut self, id: ToastId) -> bool {
        match self.toasts.iter_mut().find(|t| t.id == id) {
            Some(toast) if toast.phase == ToastPhase::Visible => {
                toast.phase = ToastPhase::Exiting;
                true
            }
            _ => false,
        }
    }

    /// Drop a toast, whether by timer or manual dismiss. `false` if it was
    /// already removed.
    pub fn remove(&mut self, id: ToastId) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|t| t.id != id);
        let removed = self.toasts.len() != before;
        if removed {
            debug!(%id, open = self.toasts.len(), "toast removed");
        }
        removed
    }

    pub fn get(&self, id: ToastId) -> Option<&Toast> {
        self.toasts.iter().find(|t| t.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter()
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use crate::timeline::Timeline;

    enum Step {
        Exit(ToastId),
        Remove(ToastId),
    }

    /// Runs toast timers the way the frontend does: exit after the lifetime,
    /// removal after the exit animation.
    fn run_until(stack: &mut ToastStack, tl: &mut Timeline<Step>, config: &SiteConfig, until: u64) {
        while let Some(step) = tl.pop_until(until) {
            match step {
                Step::Exit(id) => {
                    if stack.begin_exit(id) {
                        tl.schedule(config.toast_exit_ms, Step::Remove(id));
                    }
                }
                Step::Remove(id) => {
                    stack.remove(id);
                }
            }
        }
    }

    fn show(stack: &mut ToastStack, tl: &mut Timeline<Step>, config: &SiteConfig, n: u32) -> ToastId {
        let id = stack.push(format!("title {n}"), "body");
        tl.schedule(config.toast_lifetime_ms, Step::Exit(id));
        id
    }

    #[test]
    fn n_pushes_give_n_toasts_with_unique_ids() {
        let mut stack = ToastStack::default();
        let ids: Vec<ToastId> = (0..4).map(|n| stack.push(format!("t{n}"), "d")).collect();

        assert_eq!(stack.len(), 4);
        assert!(ids.windows(2).all(|w| w[0] < w[1]), "ids not strictly increasing: {ids:?}");
        assert!(stack.iter().all(|t| t.phase == ToastPhase::Visible));
    }

    #[test]
    fn each_toast_expires_on_its_own_timer() {
        let config = SiteConfig::default();
        let mut stack = ToastStack::default();
        let mut tl = Timeline::new();

        let first = show(&mut stack, &mut tl, &config, 1);
        run_until(&mut stack, &mut tl, &config, 2_000);
        let second = show(&mut stack, &mut tl, &config, 2);
        assert_eq!(stack.len(), 2);

        run_until(&mut stack, &mut tl, &config, 5_000);
        assert_eq!(stack.get(first).map(|t| t.phase), Some(ToastPhase::Exiting));
        assert_eq!(stack.get(second).map(|t| t.phase), Some(ToastPhase::Visible));

        run_until(&mut stack, &mut tl, &config, 5_300);
        assert!(stack.get(first).is_none());
        assert!(stack.get(second).is_some());

        run_until(&mut stack, &mut tl, &config, 7_000);
        assert_eq!(stack.get(second).map(|t| t.phase), Some(ToastPhase::Exiting));

        run_until(&mut stack, &mut tl, &config, 7_300);
        assert!(stack.is_empty());
        assert_eq!(tl.pending(), 0);
    }

    #[test]
    fn manual_dismiss_then_timer_is_a_no_op() {
        let config = SiteConfig::default();
        let mut stack = ToastStack::default();
        let mut tl = Timeline::new();

        let dismissed = show(&mut stack, &mut tl, &config, 1);
        let kept = show(&mut stack, &mut tl, &config, 2);

        assert!(stack.remove(dismissed));
        assert!(stack.get(dismissed).is_none());
        assert_eq!(stack.len(), 1);

        run_until(&mut stack, &mut tl, &config, 5_000);
        assert!(!stack.begin_exit(dismissed));
        assert!(!stack.remove(dismissed));
        assert_eq!(stack.get(kept).map(|t| t.phase), Some(ToastPhase::Exiting));
    }

    #[test]
    fn dismiss_during_exit_animation() {
        let mut stack = ToastStack::default();
        let id = stack.push("a", "b");

        assert!(stack.begin_exit(id));
        assert!(!stack.begin_exit(id));
        assert!(stack.remove(id));
        assert!(!stack.remove(id));
    }

    #[test]
    fn toast_that_never_mounts_is_dropped() {
        let config = SiteConfig::default();
        let mut stack = ToastStack::default();
        let mut tl = Timeline::new();

        let kept = show(&mut stack, &mut tl, &config, 1);
        // failed render: removed right away, no exit timer scheduled
        let failed = stack.push("lost", "never rendered");
        assert!(stack.remove(failed));

        run_until(&mut stack, &mut tl, &config, 5_300);
        assert!(stack.is_empty());
        assert!(stack.get(kept).is_none());
        assert_eq!(tl.pending(), 0);
    }
}
