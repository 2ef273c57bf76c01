mod generate_query;
mod list_brands;

pub use generate_query::GenerateQueryUseCase;
pub use list_brands::ListBrandsUseCase;
