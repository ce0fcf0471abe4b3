use poem_openapi::Tags;

#[derive(Debug, Tags)]
pub enum ApiTags {
    Health,
    Catalog,
    Cart,
    Orders,
    Delivery,
    Auth,
    Customers,
    Vendors,
}
