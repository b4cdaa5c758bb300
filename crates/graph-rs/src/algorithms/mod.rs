pub mod params;
pub mod path_count;
pub mod topo_sort;
