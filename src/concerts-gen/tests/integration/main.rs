mod pipeline;
mod store;
