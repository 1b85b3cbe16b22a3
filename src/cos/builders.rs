// objstore: request construction for S3 compatible object storage
// Copyright 2025 MinIO, Inc.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Argument builders for [objstore::cos::client::Client](crate::cos::client::Client) APIs

mod abort_multipart_upload;
mod append_object;
mod delete_object;
mod get_object;
mod head_object;
mod initiate_multipart_upload;
mod object_common;
mod put_object;
mod upload_part;

pub use abort_multipart_upload::*;
pub use append_object::*;
pub use delete_object::*;
pub use get_object::*;
pub use head_object::*;
pub use initiate_multipart_upload::*;
pub use object_common::*;
pub use put_object::*;
pub use upload_part::*;
