pub mod checkout;
pub mod contact;
pub mod email_address;
