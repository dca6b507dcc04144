use proc_macro::TokenStream;
use quote::quote;
use syn::{DataStruct, Fields, Ident, Index};

pub fn ser(name: Ident, label: String, data: DataStruct) -> TokenStream {
    let body = match data.fields {
        // C-style structs become dictionaries keyed by field-name symbols;
        // the serializer puts the entries in canonical order
        Fields::Named(fields) => {
            let idents: Vec<Ident> = fields
                .named
                .iter()
                .map(|field| field.ident.clone().unwrap())
                .collect();
            let strs: Vec<String> = idents.iter().map(ToString::to_string).collect();
            let length = idents.len();

            quote! {
                let mut state = s.map_start(#length);
                #(s.map_put(
                    &mut state,
                    &::syrup::encoding::SymbolStr(#strs),
                    &self.#idents,
                );)*
                s.map_finalize(state);
            }
        }
        // tuple structs become records labeled with the type name
        Fields::Unnamed(fields) => {
            let indices = (0..fields.unnamed.len()).map(Index::from);

            quote! {
                let mut state = s.rec_start(&::syrup::encoding::SymbolStr(#label));
                #(s.rec_put(&mut state, &self.#indices);)*
                s.rec_finalize(state);
            }
        }
        // unit structs become bare symbols
        Fields::Unit => quote! { s.put_symbol(#label); },
    };

    let imp = quote! {
        impl ::syrup::encoding::Ser for #name {
            fn ser<S: ::syrup::encoding::Serializer>(&self, s: &mut S) {
                #body
            }
        }
    };

    imp.into()
}
