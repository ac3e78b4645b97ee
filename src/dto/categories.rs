use serde::Serialize;

use crate::domain::category::Category;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryDto {
    pub category_id: i32,
    pub category_name: String,
}

impl From<Category> for CategoryDto {
    fn from(value: Category) -> Self {
        Self {
            category_id: value.id.get(),
            category_name: value.name.into_inner(),
        }
    }
}
