pub mod dtos;
pub mod structs;

pub use dtos::{
    HttpRequest, HttpResponse, Method, RequestOptions, ResponseBody, ResponseType, SearchParams,
};
pub use structs::{Mode, SortDirection, Term};
