
// --- Unit Tests ---
pub mod unit {
    pub mod admin_test;
    pub mod fulfill_test;
    pub mod mint_test;
    pub mod nft_core_test;
    pub mod views_test;
}
