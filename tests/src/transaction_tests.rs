// Tests for client-side transaction construction

#[cfg(test)]
mod tests {
    use solana_sdk::hash::Hash;
    use solana_sdk::signature::{Keypair, Signature, Signer};
    use solana_sdk::transaction::Transaction;
    use staking_sdk::instructions;

    // A freshly configured client calling initialize must yield a non-empty
    // transaction signature
    #[test]
    fn test_signed_initialize_yields_nonempty_signature() {
        let admin = Keypair::new();
        let ix = instructions::initialize(admin.pubkey());

        let transaction = Transaction::new_signed_with_payer(
            &[ix],
            Some(&admin.pubkey()),
            &[&admin],
            Hash::default(),
        );

        assert_eq!(transaction.signatures.len(), 1);
        let signature = transaction.signatures[0];
        assert_ne!(signature, Signature::default());
        assert!(!signature.to_string().is_empty());
    }

    #[test]
    fn test_initialize_transaction_verifies_offline() {
        let admin = Keypair::new();
        let ix = instructions::initialize(admin.pubkey());

        let transaction = Transaction::new_signed_with_payer(
            &[ix],
            Some(&admin.pubkey()),
            &[&admin],
            Hash::default(),
        );

        transaction.verify().expect("signature should verify");
        assert!(transaction
            .message
            .account_keys
            .contains(&staking::ID));
    }

    #[test]
    fn test_fund_transaction_signs_with_admin_only() {
        let admin = Keypair::new();
        let ix = instructions::fund(admin.pubkey(), 1_000_000);

        let transaction = Transaction::new_signed_with_payer(
            &[ix],
            Some(&admin.pubkey()),
            &[&admin],
            Hash::default(),
        );

        // Exactly one signer: the admin pays and authorizes
        assert_eq!(transaction.message.header.num_required_signatures, 1);
        assert_eq!(transaction.message.account_keys[0], admin.pubkey());
    }
}
