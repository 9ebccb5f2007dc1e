use handlebars::RenderError;
use serde::Serialize;
use crate::server::render::{Layout, SubmitButton, Table, Templates, ORDERING_PAGE};
use crate::server::view::ordering::OrderingView;

#[derive(Debug, Serialize)]
struct MenuOption {
    name: String,
    selected: bool,
}

#[derive(Debug, Serialize)]
struct OrderingPage {
    #[serde(flatten)]
    layout: Layout,
    table_number: u32,
    quantity: u32,
    /// selector options after the empty placeholder
    options: Vec<MenuOption>,
    button: SubmitButton,
    orders_table: Table,
}

fn menu_options(view: &OrderingView) -> Vec<MenuOption> {
    let selected = &view.draft().menu_item;
    view.menu_items()
        .iter()
        .map(|item| MenuOption {
            name: item.name.clone(),
            selected: &item.name == selected,
        })
        .collect()
}

pub(crate) fn render(templates: &Templates, view: &OrderingView) -> Result<String, RenderError> {
    let draft = view.draft();
    let page = OrderingPage {
        layout: Layout::new("Cafe Ordering System", "/menu-management", "Menu Management", view.error()),
        table_number: draft.table_number,
        quantity: draft.quantity,
        options: menu_options(view),
        button: SubmitButton {
            submitting: view.is_submitting(),
            label: "Place Order",
            busy_label: "Placing Order...",
        },
        orders_table: Table::new(
            ["Order ID", "Table Number", "Menu Item", "Quantity", "Status"],
            view.orders().iter().map(|order| order.cells()),
        ),
    };
    templates.render(ORDERING_PAGE, &page)
}
