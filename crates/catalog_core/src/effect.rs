use crate::FetchId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    FetchProducts { fetch_id: FetchId },
    InvalidateProducts,
}
