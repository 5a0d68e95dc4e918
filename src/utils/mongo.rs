use mongodb::{
    bson::{doc, Document},
    Collection, Cursor,
};

pub async fn find_with_pagination<T>(
    collection: &Collection<T>,
    filter: Document,
    sort_by: Option<&str>,
    ascending: Option<bool>,
    limit: Option<u32>,
    page: Option<u32>,
) -> mongodb::error::Result<Cursor<T>>
where
    T: Unpin + Send + Sync,
{
    let limit = limit.unwrap_or(10) as i64;

    let sort_order = match ascending {
        Some(true) => 1,
        _ => -1,
    };
    let sort_by = sort_by.unwrap_or("created_at");

    let mut find = collection
        .find(filter)
        .sort(doc! { sort_by: sort_order })
        .limit(limit);

    if let Some(page) = page {
        let skip = limit * (page.saturating_sub(1) as i64);
        find = find.skip(skip as u64);
    }

    find.await
}

pub fn total_pages(total: u64, limit: u32) -> u64 {
    let limit = limit.max(1) as u64;
    (total + limit - 1) / limit
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_pages_rounds_up() {
        assert_eq!(total_pages(0, 10), 0);
        assert_eq!(total_pages(1, 10), 1);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(11, 10), 2);
        assert_eq!(total_pages(5, 0), 5);
    }
}
