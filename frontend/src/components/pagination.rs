use std::ops::Range;

use yew::prelude::*;

/// Number of pages needed for `total` rows; at least one.
pub fn page_count(total: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 1;
    }
    total.div_ceil(page_size).max(1)
}

/// Index range of rows on zero-based `page`, clamped to the last page.
pub fn page_range(total: usize, page: usize, page_size: usize) -> Range<usize> {
    if page_size == 0 {
        return 0..total;
    }
    let page = page.min(page_count(total, page_size) - 1);
    let start = page * page_size;
    start..(start + page_size).min(total)
}

#[derive(Properties, PartialEq)]
pub struct PaginationProps {
    pub page: usize,
    pub total: usize,
    pub page_size: usize,
    pub on_page: Callback<usize>,
}

#[function_component(Pagination)]
pub fn pagination(props: &PaginationProps) -> Html {
    let pages = page_count(props.total, props.page_size);
    let page = props.page.min(pages - 1);
    let range = page_range(props.total, page, props.page_size);

    let go = |target: usize| {
        let on_page = props.on_page.clone();
        Callback::from(move |_: MouseEvent| on_page.emit(target))
    };

    html! {
        <div class="flex items-center justify-between mt-4 text-sm" style="color: var(--fg-muted);">
            <span>
                { if props.total == 0 {
                    "0 registros".to_string()
                } else {
                    format!("{}–{} de {}", range.start + 1, range.end, props.total)
                } }
            </span>
            <div class="flex items-center space-x-2">
                <button class="px-3 py-1 rounded" disabled={page == 0} onclick={go(page.saturating_sub(1))}>{"Anterior"}</button>
                <span>{format!("{} / {}", page + 1, pages)}</span>
                <button class="px-3 py-1 rounded" disabled={page + 1 >= pages} onclick={go(page + 1)}>{"Siguiente"}</button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_count() {
        assert_eq!(page_count(0, 25), 1);
        assert_eq!(page_count(25, 25), 1);
        assert_eq!(page_count(26, 25), 2);
        assert_eq!(page_count(10, 0), 1);
    }

    #[test]
    fn test_page_range() {
        assert_eq!(page_range(60, 0, 25), 0..25);
        assert_eq!(page_range(60, 2, 25), 50..60);
        // Past the end clamps to the last page after filters shrink the list.
        assert_eq!(page_range(60, 9, 25), 50..60);
        assert_eq!(page_range(0, 3, 25), 0..0);
    }
}
