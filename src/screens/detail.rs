use super::RequestGeneration;
use crate::error::CatalogError;
use crate::model::Product;
use crate::ui::components::carousel::CarouselState;

pub const DETAIL_ERROR: &str = "Failed to load product details. Please try again.";
pub const NOT_FOUND_MESSAGE: &str = "Product not found";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailPhase {
    Loading,
    Ready,
    Failed,
    /// Terminal: the catalog has no record for this id.
    NotFound,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DetailState {
    pub product_id: u64,
    pub product: Option<Product>,
    pub phase: DetailPhase,
    pub error: Option<String>,
    pub carousel: CarouselState,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DetailRequest {
    pub generation: u64,
    pub product_id: u64,
}

#[derive(Debug)]
pub enum DetailIntent {
    Mount,
    SetProduct(u64),
    Retry,
    NextImage,
    PrevImage,
    Loaded {
        request: DetailRequest,
        result: Result<Product, CatalogError>,
    },
}

#[derive(Debug)]
pub struct DetailScreen {
    state: DetailState,
    generation: RequestGeneration,
}

impl DetailScreen {
    pub fn new(product_id: u64) -> Self {
        Self {
            state: DetailState {
                product_id,
                product: None,
                phase: DetailPhase::Loading,
                error: None,
                carousel: CarouselState::default(),
            },
            generation: RequestGeneration::default(),
        }
    }

    pub fn state(&self) -> &DetailState {
        &self.state
    }

    pub fn can_retry(&self) -> bool {
        self.state.phase == DetailPhase::Failed
    }

    pub fn update(&mut self, intent: DetailIntent) -> Option<DetailRequest> {
        match intent {
            DetailIntent::Mount => Some(self.begin()),
            DetailIntent::SetProduct(id) if id != self.state.product_id => {
                self.state.product_id = id;
                self.state.product = None;
                self.state.carousel = CarouselState::default();
                Some(self.begin())
            }
            DetailIntent::SetProduct(_) => None,
            DetailIntent::Retry if self.can_retry() => Some(self.begin()),
            DetailIntent::Retry => None,
            DetailIntent::NextImage => {
                self.state.carousel.next();
                None
            }
            DetailIntent::PrevImage => {
                self.state.carousel.prev();
                None
            }
            DetailIntent::Loaded { request, result } => {
                self.complete(request, result);
                None
            }
        }
    }

    fn begin(&mut self) -> DetailRequest {
        self.state.phase = DetailPhase::Loading;
        self.state.error = None;
        DetailRequest {
            generation: self.generation.advance(),
            product_id: self.state.product_id,
        }
    }

    fn complete(&mut self, request: DetailRequest, result: Result<Product, CatalogError>) {
        if !self.generation.is_current(request.generation) {
            tracing::debug!(
                product_id = request.product_id,
                generation = request.generation,
                "Discarding stale product detail response"
            );
            return;
        }

        match result {
            Ok(product) => {
                self.state.carousel = CarouselState::new(product.images.len());
                self.state.product = Some(product);
                self.state.phase = DetailPhase::Ready;
            }
            Err(e) if e.is_not_found() => {
                tracing::info!(product_id = request.product_id, "Product not found");
                self.state.product = None;
                self.state.phase = DetailPhase::NotFound;
                self.state.error = Some(NOT_FOUND_MESSAGE.to_string());
            }
            Err(e) => {
                tracing::warn!(product_id = request.product_id, error = %e, "Product detail load failed");
                self.state.phase = DetailPhase::Failed;
                self.state.error = Some(DETAIL_ERROR.to_string());
            }
        }
    }
}
