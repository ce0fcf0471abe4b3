use std::collections::HashMap;

use chrono::NaiveDate;

use business::domain::account::model::{Account, CustomerAccount, VendorAccount};
use business::domain::cart::model::Cart;
use business::domain::catalog::model::{Product, Vendor};
use business::domain::dashboard::model::{
    CustomerOrderLine, CustomerOverview, StatEntry, StatValue, VendorOrderLine, VendorOverview,
    VendorProductLine, WishlistEntry,
};
use business::domain::delivery::model::DeliveryOption;
use business::domain::order::model::{Order, OrderStatus};
use business::domain::shared::value_objects::{OrderId, Price, ProductId, UserId, VendorId};

use crate::store::StoreData;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

fn stat(label: &str, value: StatValue) -> StatEntry {
    StatEntry {
        label: label.to_string(),
        value,
    }
}

fn delivery(method: &str, cost: i64, eta: &str) -> DeliveryOption {
    DeliveryOption {
        method: method.to_string(),
        cost: Price::new(cost),
        eta: eta.to_string(),
    }
}

/// The stock marketplace dataset: a handful of products and vendors, two
/// shoppers, one seller, their dashboards, and per-country delivery
/// options.
pub fn seed_data() -> StoreData {
    let products = vec![
        Product {
            id: ProductId::new(1),
            name: "Vitamin C Serum".to_string(),
            price: Price::new(3500),
            category: "Skin Care".to_string(),
            vendor_id: VendorId::new(1),
            rating: Some(4.5),
            discount_percent: Some(25),
            in_stock: true,
            image: None,
        },
        Product {
            id: ProductId::new(2),
            name: "Wireless Earbuds".to_string(),
            price: Price::new(7000),
            category: "Tech".to_string(),
            vendor_id: VendorId::new(2),
            rating: Some(4.2),
            discount_percent: None,
            in_stock: true,
            image: None,
        },
        Product {
            id: ProductId::new(3),
            name: "Jollof Rice".to_string(),
            price: Price::new(1500),
            category: "Food".to_string(),
            vendor_id: VendorId::new(5),
            rating: Some(4.8),
            discount_percent: None,
            in_stock: true,
            image: None,
        },
    ];

    let vendors = vec![
        Vendor {
            id: VendorId::new(1),
            name: "Glow Skincare".to_string(),
            location: "Old Site".to_string(),
            rating: Some(4.6),
        },
        Vendor {
            id: VendorId::new(2),
            name: "Tech Hub".to_string(),
            location: "New Site".to_string(),
            rating: Some(4.3),
        },
        Vendor {
            id: VendorId::new(5),
            name: "Campus Bites".to_string(),
            location: "New Site".to_string(),
            rating: Some(4.7),
        },
    ];

    let orders = vec![
        Order {
            id: OrderId::new(1),
            user_id: UserId::new(1),
            product: "Vitamin C Serum".to_string(),
            status: OrderStatus::Delivered,
            amount: Price::new(3500),
            placed_on: date(2024, 6, 1),
            country: "Nigeria".to_string(),
        },
        Order {
            id: OrderId::new(2),
            user_id: UserId::new(2),
            product: "Wireless Earbuds".to_string(),
            status: OrderStatus::Pending,
            amount: Price::new(7000),
            placed_on: date(2024, 6, 10),
            country: "Ghana".to_string(),
        },
    ];

    let accounts = vec![
        Account::Customer(CustomerAccount {
            id: UserId::new(1),
            email: "test@buk.edu.ng".to_string(),
            password: "password".to_string(),
            name: "Aisha Bello".to_string(),
            phone: "+2348012345678".to_string(),
            student_id: "BUK/2021/001".to_string(),
            campus_role: "Student".to_string(),
            city: "Kano".to_string(),
            country: "Nigeria".to_string(),
            avatar: None,
        }),
        Account::Customer(CustomerAccount {
            id: UserId::new(2),
            email: "john@ghana.edu".to_string(),
            password: "password".to_string(),
            name: "John Mensah".to_string(),
            phone: "+233201234567".to_string(),
            student_id: "BUK/2021/002".to_string(),
            campus_role: "Student".to_string(),
            city: "Accra".to_string(),
            country: "Ghana".to_string(),
            avatar: None,
        }),
        Account::Vendor(VendorAccount {
            id: UserId::new(3),
            email: "vendor@glow.com".to_string(),
            password: "password".to_string(),
            business_name: "Glow Skincare".to_string(),
            business_type: "Beauty & Health".to_string(),
            phone: "+2348012345679".to_string(),
            city: "Kano".to_string(),
            country: "Nigeria".to_string(),
            logo: None,
        }),
    ];

    let mut customer_overviews = HashMap::new();
    customer_overviews.insert(
        UserId::new(1),
        CustomerOverview {
            stats: vec![
                stat("Total Orders", StatValue::Count(15)),
                stat("Wishlist Items", StatValue::Count(8)),
                stat("Total Spent", StatValue::Amount(Price::new(45_000))),
            ],
            orders: vec![
                CustomerOrderLine {
                    id: OrderId::new(1),
                    product: "Vitamin C Serum".to_string(),
                    product_image: Some("https://via.placeholder.com/40".to_string()),
                    status: OrderStatus::Delivered,
                    amount: Price::new(3500),
                    placed_on: date(2024, 6, 1),
                },
                CustomerOrderLine {
                    id: OrderId::new(2),
                    product: "Wireless Earbuds".to_string(),
                    product_image: Some("https://via.placeholder.com/40".to_string()),
                    status: OrderStatus::Pending,
                    amount: Price::new(7000),
                    placed_on: date(2024, 6, 10),
                },
            ],
            wishlist: vec![
                WishlistEntry {
                    product_id: ProductId::new(1),
                    name: "Vitamin C Serum".to_string(),
                    price: Price::new(3500),
                },
                WishlistEntry {
                    product_id: ProductId::new(2),
                    name: "Wireless Earbuds".to_string(),
                    price: Price::new(7000),
                },
            ],
        },
    );
    customer_overviews.insert(
        UserId::new(2),
        CustomerOverview {
            stats: vec![
                stat("Total Orders", StatValue::Count(8)),
                stat("Wishlist Items", StatValue::Count(3)),
                stat("Total Spent", StatValue::Amount(Price::new(25_000))),
            ],
            orders: vec![CustomerOrderLine {
                id: OrderId::new(3),
                product: "Jollof Rice".to_string(),
                product_image: Some("https://via.placeholder.com/40".to_string()),
                status: OrderStatus::Delivered,
                amount: Price::new(1500),
                placed_on: date(2024, 6, 5),
            }],
            wishlist: vec![WishlistEntry {
                product_id: ProductId::new(3),
                name: "Jollof Rice".to_string(),
                price: Price::new(1500),
            }],
        },
    );

    let mut vendor_overviews = HashMap::new();
    vendor_overviews.insert(
        UserId::new(3),
        VendorOverview {
            stats: vec![
                stat("Total Products", StatValue::Count(25)),
                stat("Total Orders", StatValue::Count(45)),
                stat("Revenue", StatValue::Amount(Price::new(125_000))),
            ],
            products: vec![
                VendorProductLine {
                    id: ProductId::new(1),
                    name: "Vitamin C Serum".to_string(),
                    price: Price::new(3500),
                    category: "Skin Care".to_string(),
                    stock: 50,
                },
                VendorProductLine {
                    id: ProductId::new(4),
                    name: "Moisturizer".to_string(),
                    price: Price::new(2500),
                    category: "Skin Care".to_string(),
                    stock: 30,
                },
            ],
            orders: vec![
                VendorOrderLine {
                    id: OrderId::new(1),
                    customer: "Aisha Bello".to_string(),
                    product: "Vitamin C Serum".to_string(),
                    status: OrderStatus::Delivered,
                    amount: Price::new(3500),
                    placed_on: date(2024, 6, 1),
                },
                VendorOrderLine {
                    id: OrderId::new(2),
                    customer: "John Mensah".to_string(),
                    product: "Moisturizer".to_string(),
                    status: OrderStatus::Pending,
                    amount: Price::new(2500),
                    placed_on: date(2024, 6, 10),
                },
            ],
        },
    );

    let mut delivery_options = HashMap::new();
    delivery_options.insert(
        "Nigeria".to_string(),
        vec![
            delivery("Campus Pickup", 0, "Same Day"),
            delivery("Local Courier", 1000, "1-2 Days"),
        ],
    );
    delivery_options.insert(
        "Ghana".to_string(),
        vec![
            delivery("Campus Pickup", 0, "Same Day"),
            delivery("DHL", 3000, "2-4 Days"),
        ],
    );
    let default_delivery = vec![delivery("International Shipping", 10_000, "5-10 Days")];

    StoreData {
        products,
        vendors,
        orders,
        accounts,
        customer_overviews,
        vendor_overviews,
        delivery_options,
        default_delivery,
        cart: Cart::new(),
        session: None,
    }
}
