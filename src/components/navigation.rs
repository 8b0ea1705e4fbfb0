use dioxus::logger::tracing::debug;
use dioxus::prelude::*;

use crate::components::app_view::{view_label, AppView};

const NAV_HISTORY_LIMIT: usize = 64;

/// Swaps the active pane. Has no effect on any store beyond visibility.
#[derive(Clone, Copy, PartialEq)]
pub struct Navigation {
    current_view: Signal<AppView>,
    history: Signal<Vec<AppView>>,
}

impl Navigation {
    pub fn new(current_view: Signal<AppView>, history: Signal<Vec<AppView>>) -> Self {
        Self {
            current_view,
            history,
        }
    }

    pub fn is_at(&self, view: &AppView) -> bool {
        *self.current_view.read() == *view
    }

    pub fn navigate_to(&self, target: AppView) {
        let mut current_view = self.current_view;
        let previous = current_view.peek().clone();
        if previous == target {
            return;
        }

        debug!(from = view_label(&previous), to = view_label(&target), "navigate");
        let mut history = self.history;
        history.with_mut(|stack| {
            stack.push(previous);
            if stack.len() > NAV_HISTORY_LIMIT {
                stack.remove(0);
            }
        });

        current_view.set(target);
    }

    pub fn can_go_back(&self) -> bool {
        !self.history.read().is_empty()
    }

    pub fn go_back(&self) -> Option<AppView> {
        let mut history = self.history;
        let prev = history.with_mut(|stack| stack.pop())?;
        let mut current_view = self.current_view;
        current_view.set(prev.clone());
        Some(prev)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    thread_local! {
        static TRAIL: RefCell<Vec<Option<AppView>>> = const { RefCell::new(Vec::new()) };
    }

    fn walk() -> Element {
        let navigation = Navigation::new(use_signal(AppView::default), use_signal(Vec::new));
        use_hook(move || {
            navigation.navigate_to(AppView::Search);
            navigation.navigate_to(AppView::Search);
            navigation.navigate_to(AppView::AiChat);
            let trail = vec![navigation.go_back(), navigation.go_back(), navigation.go_back()];
            TRAIL.with(|cell| *cell.borrow_mut() = trail);
        });
        rsx! {}
    }

    #[test]
    fn go_back_retraces_distinct_views_then_stops() {
        let mut dom = VirtualDom::new(walk);
        dom.rebuild_in_place();
        let trail = TRAIL.with(|cell| cell.borrow().clone());
        assert_eq!(trail, vec![Some(AppView::Search), Some(AppView::Home), None]);
    }
}
