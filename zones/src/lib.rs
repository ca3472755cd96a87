use geometry::{Point, Rect};
use std::rc::{Rc, Weak};

pub const DEFAULT_COLS: usize = 16;
pub const DEFAULT_ROWS: usize = 9;

// Spatial is what the grid needs to know about an item: where it is, how far
// its shape can reach from there, and whether its shape contains a point.
pub trait Spatial {
    fn center(&self) -> Point;
    fn radius(&self) -> f64;
    fn contains(&self, point: &Point) -> bool;
}

// ZoneGrid partitions a region into a uniform grid of buckets. Items are
// bucketed by center, then duplicated into any of the 8 neighboring buckets
// their radius reaches into, so a point query only ever inspects the single
// bucket the point falls in. Buckets hold weak references; the caller's
// collection owns the items and must outlive the grid's usefulness.
pub struct ZoneGrid<S: Spatial> {
    region: Rect,
    cols: usize,
    rows: usize,
    // inverse bucket extents; indexing only ever divides by the bucket size
    inv_w: f64,
    inv_h: f64,
    buckets: Vec<Vec<Weak<S>>>,
}

impl<S: Spatial> ZoneGrid<S> {
    pub fn new(region: Rect, cols: usize, rows: usize) -> ZoneGrid<S> {
        assert!(cols > 0 && rows > 0, "zone grid must have at least one bucket");
        assert!(region.w > 0. && region.h > 0., "zone grid region must have positive extent");
        ZoneGrid {
            inv_w: cols as f64 / region.w,
            inv_h: rows as f64 / region.h,
            buckets: vec![Vec::new(); cols * rows],
            region,
            cols,
            rows,
        }
    }

    fn col(&self, x: f64) -> isize {
        ((x - self.region.x) * self.inv_w).floor() as isize
    }

    fn row(&self, y: f64) -> isize {
        ((y - self.region.y) * self.inv_h).floor() as isize
    }

    fn bucket_index(&self, col: isize, row: isize) -> usize {
        col as usize + row as usize * self.cols
    }

    // insert buckets the item by its center, then spills it into orthogonal
    // neighbors its radius crosses into, and into a diagonal neighbor only
    // when both of its contributing orthogonal spills occurred
    pub fn insert(&mut self, item: &Rc<S>) {
        let center = item.center();
        let radius = item.radius();
        let col = self.col(center.0);
        let row = self.row(center.1);
        debug_assert!(
            col >= 0 && col < self.cols as isize && row >= 0 && row < self.rows as isize,
            "item center outside the zone grid region",
        );
        let index = self.bucket_index(col, row);
        self.buckets[index].push(Rc::downgrade(item));

        let col_right = self.col(center.0 + radius);
        let spill_right = col_right != col && col_right < self.cols as isize;
        if spill_right {
            let index = self.bucket_index(col_right, row);
            self.buckets[index].push(Rc::downgrade(item));
        }

        let col_left = self.col(center.0 - radius);
        let spill_left = col_left != col && col_left >= 0;
        if spill_left {
            let index = self.bucket_index(col_left, row);
            self.buckets[index].push(Rc::downgrade(item));
        }

        let row_below = self.row(center.1 + radius);
        let spill_below = row_below != row && row_below < self.rows as isize;
        if spill_below {
            let index = self.bucket_index(col, row_below);
            self.buckets[index].push(Rc::downgrade(item));
        }

        let row_above = self.row(center.1 - radius);
        let spill_above = row_above != row && row_above >= 0;
        if spill_above {
            let index = self.bucket_index(col, row_above);
            self.buckets[index].push(Rc::downgrade(item));
        }

        if spill_right && spill_below {
            let index = self.bucket_index(col_right, row_below);
            self.buckets[index].push(Rc::downgrade(item));
        }
        if spill_right && spill_above {
            let index = self.bucket_index(col_right, row_above);
            self.buckets[index].push(Rc::downgrade(item));
        }
        if spill_left && spill_below {
            let index = self.bucket_index(col_left, row_below);
            self.buckets[index].push(Rc::downgrade(item));
        }
        if spill_left && spill_above {
            let index = self.bucket_index(col_left, row_above);
            self.buckets[index].push(Rc::downgrade(item));
        }
    }

    // query walks the point's bucket in insertion order and returns the first
    // item whose shape contains the point, so on overlap the earliest
    // inserted item wins
    pub fn query(&self, point: &Point) -> Option<Rc<S>> {
        if !self.region.contains(point) {
            return None;
        }
        let index = self.bucket_index(self.col(point.0), self.row(point.1));
        self.buckets[index]
            .iter()
            .filter_map(|item| item.upgrade())
            .find(|item| item.contains(point))
    }

    pub fn region(&self) -> &Rect {
        &self.region
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    // bucket returns the still-live items of one bucket, in insertion order
    pub fn bucket(&self, col: usize, row: usize) -> Vec<Rc<S>> {
        self.buckets[col + row * self.cols]
            .iter()
            .filter_map(|item| item.upgrade())
            .collect()
    }

    pub fn bucket_of(&self, point: &Point) -> Option<(usize, usize)> {
        if !self.region.contains(point) {
            return None;
        }
        Some((self.col(point.0) as usize, self.row(point.1) as usize))
    }

    // occupancy counts bucket entries, duplicates included
    pub fn occupancy(&self) -> usize {
        self.buckets.iter().map(|bucket| bucket.len()).sum()
    }
}
