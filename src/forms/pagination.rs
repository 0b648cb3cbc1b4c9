use serde::Deserialize;
use validator::Validate;

use crate::{domain::types::ItemsPerPage, forms::FormError};

/// Largest page size a caller may request.
pub const MAX_ITEMS_PER_PAGE: usize = 100;

/// Raw page query as received from the caller.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct PageQueryForm {
    /// Requested page, 1-based. Defaults to the first page.
    #[validate(range(min = 1))]
    pub page: Option<usize>,
    /// Requested page size. Falls back to the configured size.
    ///
    /// Zero is rejected when converting into [`ItemsPerPage`].
    #[validate(range(max = MAX_ITEMS_PER_PAGE))]
    pub per_page: Option<usize>,
}

/// Validated page query.
#[derive(Debug, PartialEq, Eq)]
pub struct PageQuery {
    pub page: usize,
    pub items_per_page: Option<ItemsPerPage>,
}

impl TryFrom<PageQueryForm> for PageQuery {
    type Error = FormError;

    fn try_from(form: PageQueryForm) -> Result<Self, Self::Error> {
        form.validate()?;

        let items_per_page = form
            .per_page
            .map(ItemsPerPage::new)
            .transpose()
            .map_err(|_| FormError::InvalidItemsPerPage)?;

        Ok(Self {
            page: form.page.unwrap_or(1),
            items_per_page,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_form_defaults_to_first_page() {
        let query = PageQuery::try_from(PageQueryForm::default()).unwrap();
        assert_eq!(
            query,
            PageQuery {
                page: 1,
                items_per_page: None
            }
        );
    }

    #[test]
    fn form_values_are_carried_over() {
        let form = PageQueryForm {
            page: Some(3),
            per_page: Some(25),
        };
        let query = PageQuery::try_from(form).unwrap();
        assert_eq!(query.page, 3);
        assert_eq!(query.items_per_page.map(ItemsPerPage::get), Some(25));
    }

    #[test]
    fn zero_page_is_rejected() {
        let form = PageQueryForm {
            page: Some(0),
            per_page: None,
        };
        assert!(matches!(
            PageQuery::try_from(form),
            Err(FormError::Validation(_))
        ));
    }

    #[test]
    fn zero_page_size_is_rejected() {
        let form = PageQueryForm {
            page: Some(1),
            per_page: Some(0),
        };
        assert!(matches!(
            PageQuery::try_from(form),
            Err(FormError::InvalidItemsPerPage)
        ));
    }

    #[test]
    fn largest_page_size_is_accepted() {
        let form = PageQueryForm {
            page: Some(1),
            per_page: Some(MAX_ITEMS_PER_PAGE),
        };
        let query = PageQuery::try_from(form).unwrap();
        assert_eq!(
            query.items_per_page.map(ItemsPerPage::get),
            Some(MAX_ITEMS_PER_PAGE)
        );
    }

    #[test]
    fn oversized_page_size_is_rejected() {
        let form = PageQueryForm {
            page: Some(1),
            per_page: Some(MAX_ITEMS_PER_PAGE + 1),
        };
        assert!(matches!(
            PageQuery::try_from(form),
            Err(FormError::Validation(_))
        ));
    }
}
