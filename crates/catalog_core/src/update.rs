use crate::state::NO_FURTHER_PAGE;
use crate::{AppState, Effect, FetchOutcome, FetchState, Msg, PageMove};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::Mounted => {
            // A fetch is already on its way; the completion will land as usual.
            if state.outstanding_fetch().is_some() {
                return (state, Vec::new());
            }
            let fetch_id = state.begin_fetch();
            vec![Effect::FetchProducts { fetch_id }]
        }
        Msg::RefreshRequested => {
            let fetch_id = state.begin_fetch();
            vec![
                Effect::InvalidateProducts,
                Effect::FetchProducts { fetch_id },
            ]
        }
        Msg::FetchCompleted { fetch_id, outcome } => {
            if !state.settle_fetch(fetch_id) {
                return (state, Vec::new());
            }
            match outcome {
                FetchOutcome::Loaded {
                    products,
                    skipped,
                    fetched_at,
                } => state.apply_products(products, skipped, fetched_at),
                FetchOutcome::Failed { message } => state.apply_failure(message),
            }
            Vec::new()
        }
        Msg::QueryChanged(text) => {
            if state.view_state().query() != text {
                state.view_state_mut().set_query(text);
                state.mark_dirty();
            }
            state.set_notice(None);
            Vec::new()
        }
        Msg::PageSizeSelected(size) => {
            if state.view_state().page_size() != size {
                state.view_state_mut().set_page_size(size);
                state.mark_dirty();
            }
            state.set_notice(None);
            Vec::new()
        }
        Msg::NextPageClicked => {
            if matches!(state.fetch_state(), FetchState::Success(_)) {
                let filtered = state.filtered_count();
                let moved = state.view_state_mut().next_page(filtered);
                apply_page_move(&mut state, moved);
            }
            Vec::new()
        }
        Msg::PreviousPageClicked => {
            if matches!(state.fetch_state(), FetchState::Success(_)) {
                let moved = state.view_state_mut().previous_page();
                apply_page_move(&mut state, moved);
            }
            Vec::new()
        }
        Msg::Tick | Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

fn apply_page_move(state: &mut AppState, moved: PageMove) {
    match moved {
        PageMove::Moved => {
            state.mark_dirty();
            state.set_notice(None);
        }
        PageMove::NoFurtherPage => state.set_notice(Some(NO_FURTHER_PAGE)),
    }
}
