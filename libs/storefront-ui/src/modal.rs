use std::fmt;
use std::future::Future;
use tracing::debug;

use crate::form::ProductFormData;

/// Whether the modal hosts a blank form or one prefilled from a product.
#[derive(Debug, Clone, PartialEq)]
pub enum ModalMode {
    Create,
    Edit(ProductFormData),
}

/// Create/edit dialog around the product form.
///
/// The open flag is copied from `initially_open` at construction and is owned
/// by the modal from then on. A caller that later changes its own flag is not
/// observed; use [`ProductModal::open`] or [`ProductModal::close`] instead.
pub struct ProductModal {
    is_open: bool,
    mode: ModalMode,
    on_close: Option<Box<dyn FnMut() + Send>>,
}

impl ProductModal {
    pub fn new(initially_open: bool) -> Self {
        Self {
            is_open: initially_open,
            mode: ModalMode::Create,
            on_close: None,
        }
    }

    pub fn editing(initial: ProductFormData, initially_open: bool) -> Self {
        Self {
            mode: ModalMode::Edit(initial),
            ..Self::new(initially_open)
        }
    }

    pub fn with_on_close(mut self, on_close: impl FnMut() + Send + 'static) -> Self {
        self.on_close = Some(Box::new(on_close));
        self
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn mode(&self) -> &ModalMode {
        &self.mode
    }

    /// Values the form starts with; `None` for a new product
    pub fn initial_data(&self) -> Option<&ProductFormData> {
        match &self.mode {
            ModalMode::Create => None,
            ModalMode::Edit(data) => Some(data),
        }
    }

    pub fn title(&self) -> &'static str {
        match self.mode {
            ModalMode::Create => "Add Product",
            ModalMode::Edit(_) => "Edit Product",
        }
    }

    pub fn open(&mut self) {
        self.is_open = true;
    }

    /// Close the modal and notify the caller.
    pub fn close(&mut self) {
        self.is_open = false;
        if let Some(on_close) = self.on_close.as_mut() {
            on_close();
        }
    }

    /// Hand `data` to `handler` and close once it succeeds.
    ///
    /// A failed handler leaves the modal open so the form can be corrected,
    /// and its error is returned unchanged. The close callback is not invoked.
    pub async fn submit<F, Fut, E>(&mut self, data: ProductFormData, handler: F) -> Result<(), E>
    where
        F: FnOnce(ProductFormData) -> Fut,
        Fut: Future<Output = Result<(), E>>,
    {
        handler(data).await?;
        debug!(title = self.title(), "Product form submitted");
        self.is_open = false;
        Ok(())
    }
}

impl fmt::Debug for ProductModal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProductModal")
            .field("is_open", &self.is_open)
            .field("mode", &self.mode)
            .field("on_close", &self.on_close.is_some())
            .finish()
    }
}
