use super::*;

#[test]
fn wallet_payment_blocked_when_balance_below_amount() {
    assert!(wallet_insufficient(PaymentType::Wallet, 100, 1500));
}

#[test]
fn wallet_payment_allowed_when_balance_covers_amount() {
    assert!(!wallet_insufficient(PaymentType::Wallet, 1500, 1500));
    assert!(!wallet_insufficient(PaymentType::Wallet, 2000, 1500));
}

#[test]
fn non_wallet_methods_never_block() {
    assert!(!wallet_insufficient(PaymentType::CreditCard, 0, 1500));
    assert!(!wallet_insufficient(PaymentType::BankTransfer, 0, 1500));
    assert!(!wallet_insufficient(PaymentType::Crypto, 0, 1500));
    assert!(!wallet_insufficient(PaymentType::Cash, 0, 1500));
}
