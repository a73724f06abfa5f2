//! # Navigation Commands

use beesy_core::{Action, Catalog, Screen, View};
use tracing::debug;

use crate::error::ApiError;
use crate::state::SessionState;

/// Projects the current view.
pub fn get_screen(catalog: &Catalog, session: &SessionState) -> Screen {
    session.with_session(|s| Screen::project(s, catalog))
}

/// Switches to `view` and returns the new screen.
pub fn navigate(catalog: &Catalog, session: &mut SessionState, view: View) -> Screen {
    debug!(%view, "navigate command");
    session.dispatch(Action::Navigate(view));
    get_screen(catalog, session)
}

/// Like [`navigate`], taking a view name (`landing`, `products`, `cart`).
pub fn navigate_by_name(
    catalog: &Catalog,
    session: &mut SessionState,
    view: &str,
) -> Result<Screen, ApiError> {
    let view: View = view.parse()?;
    Ok(navigate(catalog, session, view))
}

#[cfg(test)]
mod tests {
    use super::*;
    use beesy_core::projection::Page;

    #[test]
    fn test_navigate_by_name() {
        let catalog = Catalog::plants();
        let mut session = SessionState::new();

        let screen = navigate_by_name(&catalog, &mut session, "products").unwrap();
        assert!(matches!(screen.page, Page::Products(_)));
        assert!(screen.header.is_some());

        let err = navigate_by_name(&catalog, &mut session, "attic").unwrap_err();
        assert_eq!(err.message, "Unknown view: attic (expected landing, products or cart)");
        session.with_session(|s| assert_eq!(s.view(), View::Products));
    }

    #[test]
    fn test_starts_on_landing() {
        let screen = get_screen(&Catalog::plants(), &SessionState::new());
        assert!(matches!(screen.page, Page::Landing(_)));
        assert!(screen.header.is_none());
    }
}
