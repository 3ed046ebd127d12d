use serde_json::json;

use super::*;
use crawlview::model::account::AccountDto;

/// Tests that the profile action returns the account details.
///
/// Verifies the bearer token is sent to `GET /account/get` and that the payload decodes into
/// an `AccountDto`.
///
/// Expected: status 200 with the test account's username and email
#[tokio::test]
async fn profile_returns_account_details() -> Result<(), TestError> {
    let mut test = TestSetup::new().await;
    test.account().create_get_endpoint();
    let (session, _) = session(&test, Some(TEST_TOKEN));

    let response = session.profile().await;

    assert_eq!(response.status, 200);
    let account: AccountDto = serde_json::from_value(response.data)?;
    assert_eq!(account.username, TEST_USERNAME);
    assert_eq!(account.email, TEST_EMAIL);
    test.assert_mocks();

    Ok(())
}

/// Tests that edit sends the account fields with their PascalCase keys.
#[tokio::test]
async fn edit_sends_account_details() -> Result<(), TestError> {
    let mut test = TestSetup::new().await;
    test.account().create_edit_endpoint(200);
    let (session, _) = session(&test, Some(TEST_TOKEN));

    let response = session.edit(TEST_USERNAME, TEST_EMAIL, TEST_PASSWORD).await;

    assert_eq!(response.status, 200);
    assert_eq!(response.data, json!({ "message": "account updated" }));
    test.assert_mocks();

    Ok(())
}

/// Tests a rejected account edit.
///
/// Expected: status 400, message "Bad Request", blank data
#[tokio::test]
async fn edit_failure_has_blank_data() -> Result<(), TestError> {
    let mut test = TestSetup::new().await;
    test.account().create_edit_endpoint(400);
    let (session, _) = session(&test, Some(TEST_TOKEN));

    let response = session.edit(TEST_USERNAME, TEST_EMAIL, TEST_PASSWORD).await;

    assert_eq!(response.status, 400);
    assert_eq!(response.message, "Bad Request");
    assert_eq!(response.data, json!(""));
    test.assert_mocks();

    Ok(())
}

/// Tests that deleting the account leaves the token in place.
///
/// Expected: status 200 and `check_auth` still true
#[tokio::test]
async fn delete_keeps_token() -> Result<(), TestError> {
    let mut test = TestSetup::new().await;
    test.account().create_delete_endpoint(200);
    let (session, _) = session(&test, Some(TEST_TOKEN));

    let response = session.delete().await;

    assert_eq!(response.status, 200);
    assert!(session.check_auth());
    test.assert_mocks();

    Ok(())
}
