pub mod seed;
pub mod store;

pub mod account {
    pub mod repository;
}
pub mod cart {
    pub mod repository;
}
pub mod catalog {
    pub mod repository;
}
pub mod dashboard {
    pub mod repository;
}
pub mod delivery {
    pub mod repository;
}
pub mod order {
    pub mod repository;
}
pub mod session {
    pub mod repository;
}
