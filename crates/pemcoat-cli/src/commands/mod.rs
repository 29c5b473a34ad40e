pub mod collect;
pub mod literature;
