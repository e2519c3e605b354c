// ============================================================================
// Wire Messages
// ============================================================================
//
// Protobuf messages for the catalog.v1 and user.v1 packages, declared with
// prost derives. Fields carry plain scalars only; validation happens when they
// are converted into domain types.
//
// ============================================================================

// --- catalog.v1 -------------------------------------------------------------

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Product {
    #[prost(string, tag = "1")]
    pub id: String,
    #[prost(string, tag = "2")]
    pub name: String,
    #[prost(string, tag = "3")]
    pub description: String,
    #[prost(int32, tag = "4")]
    pub price: i32,
    #[prost(string, tag = "5")]
    pub manufacturer: String,
    #[prost(string, tag = "6")]
    pub purchase_link: String,
    #[prost(string, tag = "7")]
    pub image_url: String,
    #[prost(string, repeated, tag = "8")]
    pub weak_points: Vec<String>,
    #[prost(string, repeated, tag = "9")]
    pub strong_points: Vec<String>,
    #[prost(string, tag = "10")]
    pub installation_difficulty: String,
    #[prost(string, tag = "11")]
    pub category: String,
}

#[derive(Clone, Copy, PartialEq, ::prost::Message)]
pub struct ListProductsRequest {}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ListProductsResponse {
    #[prost(message, repeated, tag = "1")]
    pub products: Vec<Product>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CreateProductRequest {
    #[prost(string, tag = "1")]
    pub name: String,
    #[prost(string, tag = "2")]
    pub description: String,
    #[prost(int32, tag = "3")]
    pub price: i32,
    #[prost(string, tag = "4")]
    pub manufacturer: String,
    #[prost(string, tag = "5")]
    pub purchase_link: String,
    #[prost(string, tag = "6")]
    pub image_url: String,
    #[prost(string, repeated, tag = "7")]
    pub weak_points: Vec<String>,
    #[prost(string, repeated, tag = "8")]
    pub strong_points: Vec<String>,
    #[prost(string, tag = "9")]
    pub installation_difficulty: String,
    #[prost(string, tag = "10")]
    pub category: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetProductRequest {
    #[prost(string, tag = "1")]
    pub id: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct UpdateProductRequest {
    #[prost(message, optional, tag = "1")]
    pub product: Option<Product>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DeleteProductRequest {
    #[prost(string, tag = "1")]
    pub id: String,
}

#[derive(Clone, Copy, PartialEq, ::prost::Message)]
pub struct DeleteProductResponse {}

// --- user.v1 ----------------------------------------------------------------

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct User {
    #[prost(string, tag = "1")]
    pub id: String,
    #[prost(string, tag = "2")]
    pub email: String,
    #[prost(string, tag = "3")]
    pub name: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SignUpRequest {
    #[prost(string, tag = "1")]
    pub email: String,
    #[prost(string, tag = "2")]
    pub name: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct LoginRequest {
    #[prost(string, tag = "1")]
    pub email: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ResidenceInfo {
    #[prost(string, tag = "1")]
    pub residence_type: String,
    #[prost(int32, tag = "2")]
    pub age: i32,
    #[prost(string, tag = "3")]
    pub layout: String,
    #[prost(string, tag = "4")]
    pub ownership: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct UserContext {
    #[prost(string, tag = "1")]
    pub id: String,
    #[prost(string, tag = "2")]
    pub user_id: String,
    #[prost(message, optional, tag = "3")]
    pub residence: Option<ResidenceInfo>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetUserContextRequest {
    #[prost(string, tag = "1")]
    pub user_id: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SaveUserContextRequest {
    #[prost(string, tag = "1")]
    pub user_id: String,
    /// Empty means "generate one"
    #[prost(string, tag = "2")]
    pub context_id: String,
    #[prost(message, optional, tag = "3")]
    pub residence: Option<ResidenceInfo>,
}
