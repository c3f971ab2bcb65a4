#![cfg(test)]

mod tests {
    use crate::{storage, InvestmentCertificateContract, InvestmentCertificateContractClient};
    use shared::errors::Error;
    use soroban_sdk::{testutils::Address as _, Address, Env, String};

    fn create_test_env() -> (Env, Address, Address) {
        let env = Env::default();
        env.mock_all_auths();

        let admin = Address::generate(&env);
        let investor = Address::generate(&env);

        (env, admin, investor)
    }

    fn create_client(env: &Env) -> InvestmentCertificateContractClient {
        InvestmentCertificateContractClient::new(
            env,
            &env.register_contract(None, InvestmentCertificateContract),
        )
    }

    fn initialize(env: &Env, client: &InvestmentCertificateContractClient, admin: &Address) {
        client.initialize(
            admin,
            &String::from_str(env, "DARVEST Investment Share"),
            &String::from_str(env, "DINV"),
        );
    }

    #[test]
    fn test_initialize() {
        let (env, admin, _) = create_test_env();
        let client = create_client(&env);
        initialize(&env, &client, &admin);

        assert_eq!(
            client.name(),
            String::from_str(&env, "DARVEST Investment Share")
        );
        assert_eq!(client.symbol(), String::from_str(&env, "DINV"));
        assert_eq!(client.get_total_minted(), 0);
        assert_eq!(client.get_total_investment(), 0);
    }

    #[test]
    fn test_initialize_twice() {
        let (env, admin, _) = create_test_env();
        let client = create_client(&env);
        initialize(&env, &client, &admin);

        let result = client.try_initialize(
            &admin,
            &String::from_str(&env, "Other"),
            &String::from_str(&env, "OTH"),
        );
        assert_eq!(result, Err(Ok(Error::AlreadyInit)));
    }

    #[test]
    fn test_mint_certificate() {
        let (env, admin, investor) = create_test_env();
        let client = create_client(&env);
        initialize(&env, &client, &admin);

        let id = client.mint_certificate(&investor, &1000);

        assert_eq!(id, 1);
        assert_eq!(client.owner_of(&1), investor);
        assert_eq!(client.get_investment_amount(&1), 1000);
        assert_eq!(client.get_total_minted(), 1);
    }

    #[test]
    fn test_mint_zero_amount() {
        let (env, admin, investor) = create_test_env();
        let client = create_client(&env);
        initialize(&env, &client, &admin);

        let result = client.try_mint_certificate(&investor, &0);
        assert_eq!(result, Err(Ok(Error::InvalidAmount)));

        // No id was consumed
        assert_eq!(client.get_total_minted(), 0);
        let id = client.mint_certificate(&investor, &100);
        assert_eq!(id, 1);
    }

    #[test]
    fn test_ids_increment_per_mint() {
        let (env, admin, investor) = create_test_env();
        let client = create_client(&env);
        initialize(&env, &client, &admin);

        let other = Address::generate(&env);

        assert_eq!(client.mint_certificate(&investor, &500), 1);
        assert_eq!(client.mint_certificate(&other, &1500), 2);
        assert_eq!(client.get_total_minted(), 2);
    }

    #[test]
    fn test_total_investment_aggregates() {
        let (env, admin, investor) = create_test_env();
        let client = create_client(&env);
        initialize(&env, &client, &admin);

        let other = Address::generate(&env);

        client.mint_certificate(&investor, &1000);
        assert_eq!(client.get_total_investment(), 1000);

        client.mint_certificate(&other, &2000);
        assert_eq!(client.get_total_investment(), 3000);
    }

    #[test]
    fn test_multiple_mints_same_investor() {
        let (env, admin, investor) = create_test_env();
        let client = create_client(&env);
        initialize(&env, &client, &admin);

        client.mint_certificate(&investor, &100);
        client.mint_certificate(&investor, &200);

        assert_eq!(client.owner_of(&1), investor);
        assert_eq!(client.owner_of(&2), investor);
        assert_eq!(client.get_investment_amount(&1), 100);
        assert_eq!(client.get_investment_amount(&2), 200);
    }

    #[test]
    fn test_token_uri() {
        let (env, admin, investor) = create_test_env();
        let client = create_client(&env);
        initialize(&env, &client, &admin);

        client.mint_certificate(&investor, &1000);

        assert_eq!(
            client.token_uri(&1),
            String::from_str(&env, "https://api.darvest.io/metadata/share/1")
        );
    }

    #[test]
    fn test_token_uri_unminted_id() {
        let (env, admin, _) = create_test_env();
        let client = create_client(&env);
        initialize(&env, &client, &admin);

        let result = client.try_token_uri(&99);
        assert_eq!(result, Err(Ok(Error::TokenNotFound)));
    }

    #[test]
    fn test_queries_on_unminted_id() {
        let (env, admin, _) = create_test_env();
        let client = create_client(&env);
        initialize(&env, &client, &admin);

        assert_eq!(client.try_owner_of(&500), Err(Ok(Error::TokenNotFound)));
        assert_eq!(
            client.try_get_investment_amount(&500),
            Err(Ok(Error::TokenNotFound))
        );
    }

    #[test]
    fn test_owner_cannot_transfer() {
        let (env, admin, investor) = create_test_env();
        let client = create_client(&env);
        initialize(&env, &client, &admin);

        let recipient = Address::generate(&env);
        client.mint_certificate(&investor, &1000);

        let result = client.try_transfer(&investor, &recipient, &1);
        assert_eq!(result, Err(Ok(Error::TransferForbidden)));

        // Ownership is untouched
        assert_eq!(client.owner_of(&1), investor);
    }

    #[test]
    fn test_safe_transfer_also_forbidden() {
        let (env, admin, investor) = create_test_env();
        let client = create_client(&env);
        initialize(&env, &client, &admin);

        let recipient = Address::generate(&env);
        client.mint_certificate(&investor, &1000);

        let result = client.try_safe_transfer(&investor, &recipient, &1);
        assert_eq!(result, Err(Ok(Error::TransferForbidden)));
    }

    #[test]
    fn test_approval_does_not_unlock_transfer() {
        let (env, admin, investor) = create_test_env();
        let client = create_client(&env);
        initialize(&env, &client, &admin);

        let delegate = Address::generate(&env);
        client.mint_certificate(&investor, &1000);

        client.approve(&investor, &delegate, &1);

        // The delegation is recorded...
        let recorded = env.as_contract(&client.address, || storage::get_delegate(&env, 1));
        assert_eq!(recorded, Some(delegate.clone()));

        // ...but the delegate still cannot move the certificate
        let result = client.try_transfer(&delegate, &delegate, &1);
        assert_eq!(result, Err(Ok(Error::TransferForbidden)));
        assert_eq!(client.owner_of(&1), investor);
    }

    #[test]
    fn test_third_party_cannot_transfer() {
        let (env, admin, investor) = create_test_env();
        let client = create_client(&env);
        initialize(&env, &client, &admin);

        let stranger = Address::generate(&env);
        client.mint_certificate(&investor, &1000);

        let result = client.try_transfer(&stranger, &stranger, &1);
        assert_eq!(result, Err(Ok(Error::TransferForbidden)));
    }

    #[test]
    fn test_transfer_unminted_id() {
        let (env, admin, investor) = create_test_env();
        let client = create_client(&env);
        initialize(&env, &client, &admin);

        let recipient = Address::generate(&env);
        let result = client.try_transfer(&investor, &recipient, &7);
        assert_eq!(result, Err(Ok(Error::TokenNotFound)));
    }

    #[test]
    fn test_approve_unminted_id() {
        let (env, admin, investor) = create_test_env();
        let client = create_client(&env);
        initialize(&env, &client, &admin);

        let delegate = Address::generate(&env);
        let result = client.try_approve(&investor, &delegate, &7);
        assert_eq!(result, Err(Ok(Error::TokenNotFound)));
    }

    #[test]
    fn test_two_mint_scenario() {
        let (env, admin, investor) = create_test_env();
        let client = create_client(&env);
        initialize(&env, &client, &admin);

        let other = Address::generate(&env);

        let first = client.mint_certificate(&investor, &1000);
        assert_eq!(first, 1);
        assert_eq!(client.owner_of(&1), investor);
        assert_eq!(client.get_investment_amount(&1), 1000);
        assert_eq!(client.get_total_minted(), 1);

        let second = client.mint_certificate(&other, &2000);
        assert_eq!(second, 2);
        assert_eq!(client.get_total_investment(), 3000);
    }
}
