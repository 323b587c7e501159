/*!
OData model decoding and encoding, together with the Microsoft Graph beta
device management models in [graph].
*/

pub use odatamodel_core::*;

pub use odatamodel_graph as graph;
