use handlebars::RenderError;
use serde::Serialize;
use crate::server::render::{Layout, SubmitButton, Table, Templates, MENU_MANAGEMENT_PAGE};
use crate::server::view::menu_management::MenuManagementView;

#[derive(Debug, Serialize)]
struct MenuManagementPage {
    #[serde(flatten)]
    layout: Layout,
    name: String,
    description: String,
    price: String,
    available: bool,
    button: SubmitButton,
    items_table: Table,
}

pub(crate) fn render(templates: &Templates, view: &MenuManagementView) -> Result<String, RenderError> {
    let draft = view.draft();
    let page = MenuManagementPage {
        layout: Layout::new("Menu Management", "/", "Back to Order Page", view.error()),
        name: draft.name.clone(),
        description: draft.description.clone(),
        price: draft.price.to_string(),
        available: draft.available,
        button: SubmitButton {
            submitting: view.is_submitting(),
            label: "Add Menu Item",
            busy_label: "Adding...",
        },
        items_table: Table::new(
            ["Name", "Description", "Price", "Available"],
            view.menu_items().iter().map(|item| item.cells()),
        ),
    };
    templates.render(MENU_MANAGEMENT_PAGE, &page)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::server::api::fake::latte;
    use crate::server::api::FetchError;
    use crate::server::view::ViewError;
    use reqwest::StatusCode;

    #[test]
    fn renders_menu_rows() {
        let mut view = MenuManagementView::default();
        let epoch = view.begin_mount();
        view.finish_mount(epoch, Ok(vec![latte()]));

        let html = render(&Templates::new().unwrap(), &view).unwrap();
        assert!(html.contains("<h1>Menu Management</h1>"));
        assert!(html.contains(r#"<a href="/"><button type="button">Back to Order Page</button></a>"#));
        assert!(html.contains(
            "<th>Name</th><th>Description</th><th>Price</th><th>Available</th>"
        ));
        assert!(html.contains(
            "<tr><td>Latte</td><td>Hot coffee</td><td>$3.50</td><td>Yes</td></tr>"
        ));
        assert!(html.contains(r#"<button type="submit">Add Menu Item</button>"#));
        assert!(html.contains(r#"name="available" checked"#));
    }

    #[test]
    fn renders_fetch_banner() {
        let mut view = MenuManagementView::default();
        let epoch = view.begin_mount();
        view.finish_mount(epoch, Err(FetchError::Status(StatusCode::BAD_GATEWAY)));

        let html = render(&Templates::new().unwrap(), &view).unwrap();
        assert!(html.contains(&format!(r#"role="alert">{}</p>"#, ViewError::FetchMenuItems)));
        assert!(html.contains("<tbody></tbody>"));
    }

    #[test]
    fn renders_busy_form() {
        let mut view = MenuManagementView::default();
        view.begin_mount();
        view.set_name("Mocha");
        view.set_description("Chocolate \"dark\"");
        view.set_available(false);
        assert!(view.begin_submit().is_some());

        let html = render(&Templates::new().unwrap(), &view).unwrap();
        assert!(html.contains(r#"<button type="submit" disabled>Adding...</button>"#));
        assert!(html.contains(r#"value="Chocolate &quot;dark&quot;""#));
        assert!(!html.contains(" checked"));
    }
}
