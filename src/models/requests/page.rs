//! Query parameters for list endpoints.

use serde::Deserialize;
use utoipa::IntoParams;

/// `?page=&size=`; `page` is 1-based.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PageQuery {
    /// Page number, starting at 1 (default: 1)
    pub page: Option<i64>,
    /// Items per page (default: 10, max: 100). Larger values are lowered to
    /// 100, and `meta.pageSize` reports the size actually applied.
    pub size: Option<i64>,
}
