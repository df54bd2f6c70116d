pub mod change_category_status;
pub mod create_category;
pub mod delete_category;
pub mod get_category;
pub mod list_categories;
pub mod update_category;

pub use change_category_status::{
    ChangeCategoryStatusCommand, ChangeCategoryStatusHandler, ChangeCategoryStatusResult,
};
pub use create_category::{CreateCategoryCommand, CreateCategoryHandler, CreateCategoryResult};
pub use delete_category::{DeleteCategoryCommand, DeleteCategoryHandler};
pub use get_category::{CategoryOutput, GetCategoryByIdHandler, GetCategoryByIdQuery};
pub use list_categories::{CategoryListOutput, ListCategoriesHandler, ListCategoriesQuery};
pub use update_category::{UpdateCategoryCommand, UpdateCategoryHandler, UpdateCategoryResult};
