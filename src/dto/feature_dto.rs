use serde::Deserialize;
use validator::Validate;

// Request para crear una feature
#[derive(Debug, Deserialize, Validate)]
pub struct CreateFeatureRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
}
