use contracts::projections::p001_product_catalog::FilterState;
use leptos::prelude::*;

/// Состояние фильтров страницы. Живёт только в памяти вкладки.
pub fn create_state() -> RwSignal<FilterState> {
    RwSignal::new(FilterState::default())
}

/// Применить чистый переход к состоянию
pub fn apply(signal: RwSignal<FilterState>, transition: impl FnOnce(FilterState) -> FilterState) {
    signal.update(|st| *st = transition(std::mem::take(st)));
    log::debug!("Filter state: {:?}", signal.get_untracked());
}
