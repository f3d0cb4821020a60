// ── Declarative table grid ──
//
// The paging/sorting state behind a rendered table. Options are fixed at
// construction; front ends only read `columns()` and `visible()`.

use std::fmt;

use crate::error::CoreError;
use crate::model::Server;

/// Rows per page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageSize {
    Rows(usize),
    All,
}

impl fmt::Display for PageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rows(n) => write!(f, "{n}"),
            Self::All => f.write_str("All"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Descending,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridOptions {
    /// Page-size menu, in display order.
    pub page_sizes: Vec<PageSize>,
    pub default_page_size: PageSize,
    /// Column indexes that cannot be sorted.
    pub unsortable_columns: Vec<usize>,
    /// Initial sort; `None` keeps backend order.
    pub default_sort: Option<(usize, SortOrder)>,
}

impl GridOptions {
    /// Server tables: 25/50/100/All, 25 by default, the trailing actions
    /// column (11) unsortable, backend order preserved.
    pub fn servers() -> Self {
        Self {
            page_sizes: vec![
                PageSize::Rows(25),
                PageSize::Rows(50),
                PageSize::Rows(100),
                PageSize::All,
            ],
            default_page_size: PageSize::Rows(25),
            unsortable_columns: vec![11],
            default_sort: None,
        }
    }
}

/// A record type that can be laid out as grid columns.
pub trait GridRow {
    /// Column headers, in order.
    const COLUMNS: &'static [&'static str];

    /// Text of one cell; used for sorting and plain rendering.
    fn cell(&self, column: usize) -> String;
}

pub struct Grid<T> {
    rows: Vec<T>,
    options: GridOptions,
    page_size: PageSize,
    page: usize,
    sort: Option<(usize, SortOrder)>,
}

impl<T: GridRow> Grid<T> {
    pub fn new(rows: Vec<T>, options: GridOptions) -> Self {
        let mut grid = Self {
            page_size: options.default_page_size,
            sort: None,
            page: 0,
            rows,
            options,
        };
        if let Some((column, order)) = grid.options.default_sort {
            grid.apply_sort(column, order);
        }
        grid
    }

    pub fn columns(&self) -> &'static [&'static str] {
        T::COLUMNS
    }

    pub fn options(&self) -> &GridOptions {
        &self.options
    }

    /// Every row, in the current sort order.
    pub fn rows(&self) -> &[T] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn page_size(&self) -> PageSize {
        self.page_size
    }

    /// Pick a size from the page-size menu; resets to the first page.
    pub fn set_page_size(&mut self, size: PageSize) -> Result<(), CoreError> {
        if !self.options.page_sizes.contains(&size) {
            return Err(CoreError::ValidationFailed {
                message: format!("page size {size} is not offered"),
            });
        }
        self.page_size = size;
        self.page = 0;
        Ok(())
    }

    pub fn page_count(&self) -> usize {
        match self.page_size {
            PageSize::Rows(n) if n > 0 => self.rows.len().div_ceil(n).max(1),
            _ => 1,
        }
    }

    /// Zero-based current page.
    pub fn page(&self) -> usize {
        self.page
    }

    /// Jump to `page`, clamped to the last page.
    pub fn set_page(&mut self, page: usize) {
        self.page = page.min(self.page_count() - 1);
    }

    /// Rows on the current page.
    pub fn visible(&self) -> &[T] {
        match self.page_size {
            PageSize::Rows(n) if n > 0 => {
                let start = (self.page * n).min(self.rows.len());
                let end = (start + n).min(self.rows.len());
                &self.rows[start..end]
            }
            _ => &self.rows,
        }
    }

    pub fn sort(&self) -> Option<(usize, SortOrder)> {
        self.sort
    }

    pub fn sort_by(&mut self, column: usize, order: SortOrder) -> Result<(), CoreError> {
        if column >= T::COLUMNS.len() {
            return Err(CoreError::ValidationFailed {
                message: format!("no column {column}"),
            });
        }
        if self.options.unsortable_columns.contains(&column) {
            return Err(CoreError::ValidationFailed {
                message: format!("column '{}' is not sortable", T::COLUMNS[column]),
            });
        }
        self.apply_sort(column, order);
        Ok(())
    }

    fn apply_sort(&mut self, column: usize, order: SortOrder) {
        self.rows.sort_by(|a, b| {
            let ord = a.cell(column).cmp(&b.cell(column));
            match order {
                SortOrder::Ascending => ord,
                SortOrder::Descending => ord.reverse(),
            }
        });
        self.sort = Some((column, order));
        self.page = 0;
    }
}

fn opt(value: Option<&String>) -> String {
    value.cloned().unwrap_or_default()
}

impl GridRow for Server {
    const COLUMNS: &'static [&'static str] = &[
        "Host",
        "Domain",
        "IP",
        "IPv6",
        "Status",
        "Type",
        "Profile",
        "CDN",
        "Cache Group",
        "Phys Location",
        "Upd Pending",
        "Actions",
    ];

    fn cell(&self, column: usize) -> String {
        match column {
            0 => self.host_name.clone(),
            1 => self.domain_name.clone(),
            2 => opt(self.ip_address.as_ref()),
            3 => opt(self.ip6_address.as_ref()),
            4 => self.status.clone(),
            5 => opt(self.server_type.as_ref()),
            6 => opt(self.profile.as_ref()),
            7 => opt(self.cdn_name.as_ref()),
            8 => opt(self.cache_group.as_ref()),
            9 => opt(self.phys_location.as_ref()),
            10 => self.update_pending.to_string(),
            _ => String::new(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::model::EntityId;
    use pretty_assertions::assert_eq;

    fn servers(n: i64) -> Vec<Server> {
        (0..n)
            .map(|i| Server {
                id: EntityId::new(i),
                host_name: format!("edge-{:03}", n - i),
                status: "ONLINE".into(),
                ..Server::default()
            })
            .collect()
    }

    #[test]
    fn server_options() {
        let opts = GridOptions::servers();
        let labels: Vec<String> = opts.page_sizes.iter().map(ToString::to_string).collect();
        assert_eq!(labels, vec!["25", "50", "100", "All"]);
        assert_eq!(opts.default_page_size, PageSize::Rows(25));
        assert_eq!(opts.unsortable_columns, vec![11]);
        assert_eq!(opts.default_sort, None);
        assert_eq!(Server::COLUMNS[11], "Actions");
    }

    #[test]
    fn keeps_backend_order_by_default() {
        let grid = Grid::new(servers(3), GridOptions::servers());
        let hosts: Vec<&str> = grid.rows().iter().map(|s| s.host_name.as_str()).collect();
        assert_eq!(hosts, vec!["edge-003", "edge-002", "edge-001"]);
        assert_eq!(grid.sort(), None);
    }

    #[test]
    fn pages_of_twenty_five() {
        let mut grid = Grid::new(servers(60), GridOptions::servers());
        assert_eq!(grid.page_count(), 3);
        assert_eq!(grid.visible().len(), 25);
        grid.set_page(7);
        assert_eq!(grid.page(), 2);
        assert_eq!(grid.visible().len(), 10);

        grid.set_page_size(PageSize::All).unwrap();
        assert_eq!(grid.page(), 0);
        assert_eq!(grid.visible().len(), 60);
        assert!(grid.set_page_size(PageSize::Rows(10)).is_err());
    }

    #[test]
    fn empty_grid_has_one_page() {
        let mut grid = Grid::new(Vec::<Server>::new(), GridOptions::servers());
        assert_eq!(grid.page_count(), 1);
        grid.set_page(3);
        assert!(grid.visible().is_empty());
    }

    #[test]
    fn actions_column_is_not_sortable() {
        let mut grid = Grid::new(servers(3), GridOptions::servers());
        assert!(grid.sort_by(11, SortOrder::Ascending).is_err());
        assert!(grid.sort_by(12, SortOrder::Ascending).is_err());

        grid.sort_by(0, SortOrder::Ascending).unwrap();
        assert_eq!(grid.rows()[0].host_name, "edge-001");
        grid.sort_by(0, SortOrder::Descending).unwrap();
        assert_eq!(grid.rows()[0].host_name, "edge-003");
    }
}
