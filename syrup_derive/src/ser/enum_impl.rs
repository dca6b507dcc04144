use proc_macro::TokenStream;
use quote::{format_ident, quote};
use syn::{DataEnum, Fields, Ident};

pub fn ser(name: Ident, data: DataEnum) -> TokenStream {
    let arms = data.variants.iter().map(|variant| {
        let vname = &variant.ident;
        let vstr = vname.to_string();

        match &variant.fields {
            // unit variants are bare symbols
            Fields::Unit => quote! { #name::#vname => s.put_symbol(#vstr), },
            // tuple variants are records labeled with the variant name
            Fields::Unnamed(fields) => {
                let binds: Vec<Ident> = (0..fields.unnamed.len())
                    .map(|ix| format_ident!("f{}", ix))
                    .collect();

                quote! {
                    #name::#vname(#(#binds),*) => {
                        let mut state =
                            s.rec_start(&::syrup::encoding::SymbolStr(#vstr));
                        #(s.rec_put(&mut state, #binds);)*
                        s.rec_finalize(state);
                    }
                }
            }
            // struct variants are records whose sole field is the
            // field dictionary
            Fields::Named(fields) => {
                let idents: Vec<Ident> = fields
                    .named
                    .iter()
                    .map(|field| field.ident.clone().unwrap())
                    .collect();
                let strs: Vec<String> = idents.iter().map(ToString::to_string).collect();
                let length = idents.len();

                quote! {
                    #name::#vname { #(#idents),* } => {
                        let state =
                            s.rec_start(&::syrup::encoding::SymbolStr(#vstr));
                        let mut fields_state = s.map_start(#length);
                        #(s.map_put(
                            &mut fields_state,
                            &::syrup::encoding::SymbolStr(#strs),
                            #idents,
                        );)*
                        s.map_finalize(fields_state);
                        s.rec_finalize(state);
                    }
                }
            }
        }
    });

    let imp = quote! {
        impl ::syrup::encoding::Ser for #name {
            fn ser<S: ::syrup::encoding::Serializer>(&self, s: &mut S) {
                match self {
                    #(#arms)*
                }
            }
        }
    };

    imp.into()
}
