/*!
 * Integration tests for prospect insert, update, delete and search
 */

use anyhow::Result;
use prospects::ProspectRecord;

use crate::common;

/// Insert then read returns the same fields with a store-assigned ID
#[tokio::test]
async fn test_insertThenSearch_shouldReturnSameFields() -> Result<()> {
    let (_dir, dao) = common::create_test_dao()?;
    let prospect = common::sample_prospect("Joana Prado");

    let id = dao.insert_prospect(&prospect).await?;
    let found = dao.search_prospects(Some("joana.prado@example.com")).await?;

    assert_eq!(found, vec![prospect.with_id(id)]);
    Ok(())
}

/// IDs are assigned in insertion order and search returns rows in that order
#[tokio::test]
async fn test_searchAll_shouldReturnEveryRowOrderedById() -> Result<()> {
    let (_dir, dao) = common::create_test_dao()?;

    let mut ids = Vec::new();
    for name in ["Ana", "Bruno", "Carla"] {
        ids.push(dao.insert_prospect(&common::sample_prospect(name)).await?);
    }

    let found = dao.search_prospects(None).await?;
    let found_ids: Vec<i64> = found.iter().map(|p| p.id).collect();
    assert_eq!(found_ids, ids);
    assert_eq!(found[1].name, "Bruno");
    Ok(())
}

/// Update changes only the targeted row
#[tokio::test]
async fn test_update_shouldLeaveOtherRowsUntouched() -> Result<()> {
    let (_dir, dao) = common::create_test_dao()?;
    let ana = dao.insert_prospect(&common::sample_prospect("Ana")).await?;
    let bruno = dao.insert_prospect(&common::sample_prospect("Bruno")).await?;

    let mut changed = common::sample_prospect("Ana").with_id(ana);
    changed.whatsapp = "+55 21 98888-7777".to_string();
    assert!(dao.update_prospect(&changed).await?);

    let found = dao.search_prospects(None).await?;
    assert_eq!(found[0], changed);
    assert_eq!(found[1], common::sample_prospect("Bruno").with_id(bruno));
    Ok(())
}

/// Updating a missing ID reports false and changes nothing
#[tokio::test]
async fn test_update_withMissingId_shouldReportFalse() -> Result<()> {
    let (_dir, dao) = common::create_test_dao()?;
    let id = dao.insert_prospect(&common::sample_prospect("Ana")).await?;

    let ghost = common::sample_prospect("Ghost").with_id(id + 100);
    assert!(!dao.update_prospect(&ghost).await?);

    let found = dao.search_prospects(None).await?;
    assert_eq!(found, vec![common::sample_prospect("Ana").with_id(id)]);
    Ok(())
}

/// Delete removes the row; deleting again reports false
#[tokio::test]
async fn test_delete_shouldRemoveRow() -> Result<()> {
    let (_dir, dao) = common::create_test_dao()?;
    let ana = dao.insert_prospect(&common::sample_prospect("Ana")).await?;
    let bruno = dao.insert_prospect(&common::sample_prospect("Bruno")).await?;

    assert!(dao.delete_prospect(ana).await?);
    assert!(!dao.delete_prospect(ana).await?);

    let remaining: Vec<i64> = dao
        .search_prospects(None)
        .await?
        .into_iter()
        .map(|p| p.id)
        .collect();
    assert_eq!(remaining, vec![bruno]);
    Ok(())
}

/// An email nobody has yields an empty list, not an error
#[tokio::test]
async fn test_search_withUnknownEmail_shouldReturnEmpty() -> Result<()> {
    let (_dir, dao) = common::create_test_dao()?;
    dao.insert_prospect(&common::sample_prospect("Ana")).await?;

    assert!(dao.search_prospects(Some("nobody@example.com")).await?.is_empty());
    Ok(())
}

/// Data written by one DAO is visible to another opened on the same file
#[tokio::test]
async fn test_data_shouldPersistAcrossDaoInstances() -> Result<()> {
    let (dir, dao) = common::create_test_dao()?;
    let id = dao
        .insert_prospect(&ProspectRecord::new("Rafa", "rafa@example.com", "1", "", ""))
        .await?;
    drop(dao);

    let reopened = prospects::ProspectDao::new(prospects::DatabaseConnector::new(
        dir.path().join("prospects.db"),
    )?);
    let found = reopened.search_prospects(Some("rafa@example.com")).await?;
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id, id);
    Ok(())
}
