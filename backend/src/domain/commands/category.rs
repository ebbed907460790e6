use shared::{CreateCategoryRequest, UpdateCategoryRequest};

#[derive(Debug, Clone, PartialEq)]
pub struct CreateCategoryCommand {
    pub name: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UpdateCategoryCommand {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DeleteCategoryCommand {
    pub id: i64,
}

impl From<CreateCategoryRequest> for CreateCategoryCommand {
    fn from(request: CreateCategoryRequest) -> Self {
        Self { name: request.name }
    }
}

impl UpdateCategoryCommand {
    pub fn new(id: i64, request: UpdateCategoryRequest) -> Self {
        Self {
            id,
            name: request.name,
        }
    }
}
